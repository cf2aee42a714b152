//! This module is separated into its own crate to enable simple dynamic linking for `flipbook`, and should not be used directly.

/// `use flipbook::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export flipbook_core for convenience
pub use flipbook_core;

// Re-export commonly used types at crate root
pub use flipbook_core::anim::{
	AnimError, Axis, Clip, DEFAULT_CLIP, EffectKind, EffectOptions, FrameOutput, ImageSource,
	SourceRect, Sprite, Transform,
};
