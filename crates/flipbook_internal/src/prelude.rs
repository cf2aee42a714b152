//! Prelude module for `flipbook_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use flipbook_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let sprite: Sprite<Strip> = Sprite::new();
//! assert_eq!(sprite.current_clip(), DEFAULT_CLIP);
//!
//! let t = Transform::new();
//! assert_eq!(t.alpha, 1.0);
//! # struct Strip;
//! # impl ImageSource for Strip {
//! # 	fn dimensions(&self) -> (u32, u32) {
//! # 		(1, 1)
//! # 	}
//! # }
//! ```

// Re-export everything from flipbook_core::prelude
#[doc(inline)]
pub use flipbook_core::prelude::*;

// Re-export the entire flipbook_core module for advanced usage
#[doc(inline)]
pub use flipbook_core;
