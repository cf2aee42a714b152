//! Prelude module for `flipbook_core`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use flipbook_core::prelude::*;
//!
//! // Now you can use all common types directly
//! let mut sprite: Sprite<DummyStrip> = Sprite::new();
//! sprite.transform.set_uniform_zoom(2.0);
//! assert_eq!(map_range(0.5, (0.0, 1.0), (0.0, 10.0)), 5.0);
//! # struct DummyStrip;
//! # impl ImageSource for DummyStrip {
//! # 	fn dimensions(&self) -> (u32, u32) {
//! # 		(1, 1)
//! # 	}
//! # }
//! ```

// Animation module types
#[doc(inline)]
pub use crate::anim::{
	// Constants
	DEFAULT_CLIP,

	// Errors
	AnimError,
	Axis,

	// Clips
	Clip,

	// Effects
	Effect,
	EffectKind,
	EffectOptions,
	EffectStack,

	// Backend boundary
	FrameOutput,
	ImageSource,
	SourceRect,

	// Sprites
	Sprite,
	Transform,

	map_range,
};

// Re-export the anim module for advanced usage
#[doc(inline)]
pub use crate::anim;
