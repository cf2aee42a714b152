//! This crate provides the animation engine for the `flipbook-rs` project.
//!
//! # Overview
//!
//! A sprite is an on-screen entity with a set of named clips (frame sequences
//! cut from one image strip) and a mutable transform state (position, zoom,
//! rotation, skew, color multipliers, alpha). Each rendered frame, the caller
//! invokes [`Sprite::tick`](crate::anim::Sprite::tick) with the current
//! instant; the engine integrates movement, evaluates every active effect of
//! the selected clip and advances the displayed frame, then hands back
//! everything the rendering backend needs for one draw call.
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use flipbook_core::prelude::*;
//!
//! struct Strip(u32, u32);
//!
//! impl ImageSource for Strip {
//! 	fn dimensions(&self) -> (u32, u32) {
//! 		(self.0, self.1)
//! 	}
//! }
//!
//! # fn main() -> Result<(), AnimError> {
//! let mut sprite = Sprite::new();
//! sprite.register_clip("walk", Strip(96, 24), Duration::from_millis(700), 6)?;
//! sprite.select_clip("walk")?;
//! sprite.start()?;
//!
//! if let Some(frame) = sprite.tick(Instant::now())? {
//! 	// feed frame.source_rect and frame.transform to the renderer
//! 	assert_eq!(frame.source_rect.width, 16);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use flipbook_core::anim::{EffectKind, EffectOptions, Sprite};
//! ```

pub mod anim;

/// `use flipbook_core::prelude::*;` to import commonly used items.
pub mod prelude;
