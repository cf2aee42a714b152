//! Sprite animation support for the `flipbook-rs` project.
//!
//! This module drives frame-by-frame visual state for 2-D sprites: which frame
//! of a clip is currently showing, and how position, scale, rotation, skew,
//! color and opacity evolve over time under declarative, time-bounded effects.
//!
//! # Architecture Overview
//!
//! The engine is built from five pieces, leaves first:
//!
//! - [`range::map_range`]: pure linear interpolation between two intervals,
//!   the primitive under every effect curve.
//! - [`Clip`]: a named frame sequence cut from one image strip, plus the
//!   per-clip state machine that advances the displayed frame index on a
//!   wall-clock cadence (looping or run-once-with-callback).
//! - [`Effect`]: one timed transformation (scale, flip, fade, turn, hue,
//!   move) evaluated against elapsed time, with one-way or go-back playback,
//!   repeat-forever and per-cycle callbacks.
//! - [`EffectStack`]: the ordered, per-clip collection of concurrently active
//!   effects, applied in insertion order every tick; a repeating effect is
//!   re-armed in its own slot so paint order never changes across cycles.
//! - [`Transform`]: the mutable attribute bag effects write into and the
//!   rendering backend reads from.
//!
//! # Control Flow Per Rendered Frame
//!
//! ```text
//! tick(now)
//!   ├─ movement integration (speed/direction)
//!   ├─ effect stack of the selected clip, in insertion order
//!   ├─ snapshot: frame index + source rectangle + transform state
//!   └─ frame stepper advance (if the per-frame duration elapsed)
//! ```
//!
//! The engine is single-threaded and cooperative: all state changes happen
//! synchronously inside `tick`, driven by the caller's render loop. Time is
//! sampled from the monotonic instant the caller passes in, so animations
//! drawn at a lower cadence than the render loop still run at wall-clock
//! speed, just choppier.
//!
//! # Usage Examples
//!
//! ## Walking sprite
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use flipbook_core::anim::{ImageSource, Sprite};
//!
//! struct Strip(u32, u32);
//!
//! impl ImageSource for Strip {
//! 	fn dimensions(&self) -> (u32, u32) {
//! 		(self.0, self.1)
//! 	}
//! }
//!
//! # fn main() -> Result<(), flipbook_core::anim::AnimError> {
//! let mut girl = Sprite::new();
//! girl.register_clip("walk-right", Strip(96, 24), Duration::from_millis(700), 6)?;
//! girl.transform.set_position(160.0, 120.0);
//! girl.speed = 2.0;
//! girl.direction = 0.0;
//! girl.select_clip("walk-right")?;
//! girl.start()?;
//!
//! let frame = girl.tick(Instant::now())?.expect("sprite is visible");
//! assert_eq!(frame.frame_index, 0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Breathing effect
//!
//! ```
//! use std::time::Duration;
//!
//! use flipbook_core::anim::{EffectKind, EffectOptions, ImageSource, Sprite};
//! # struct Strip(u32, u32);
//! # impl ImageSource for Strip {
//! # 	fn dimensions(&self) -> (u32, u32) {
//! # 		(self.0, self.1)
//! # 	}
//! # }
//!
//! # fn main() -> Result<(), flipbook_core::anim::AnimError> {
//! let mut sprite = Sprite::new();
//! sprite.register_clip("default", Strip(24, 24), Duration::from_millis(1), 1)?;
//!
//! // zoom in to 1.3x and back, forever
//! sprite.add_effect(
//! 	EffectOptions::new(EffectKind::Scale { target: 1.3 }, Duration::from_millis(1000))
//! 		.with_go_back()
//! 		.with_repeat(),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod clip;
pub mod effect;
pub mod range;
pub mod sprite;
pub mod transform;

mod error;

/// Label of the implicit default clip.
///
/// A freshly created [`Sprite`] selects this label, and
/// [`EffectOptions`](effect::EffectOptions) targets it when no clip label is
/// given. Registering a clip under `DEFAULT_CLIP` is enough for single-clip
/// sprites to work without ever naming a clip.
pub const DEFAULT_CLIP: &str = "default";

// Re-export unified error type
pub use error::AnimError;

// Re-export main animation types
pub use backend::{FrameOutput, ImageSource, SourceRect};
pub use clip::Clip;
pub use effect::{Axis, Effect, EffectKind, EffectOptions, EffectStack};
pub use range::map_range;
pub use sprite::Sprite;
pub use transform::Transform;
