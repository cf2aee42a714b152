//! Timed sprite effects.
//!
//! An effect is a single bounded-duration transformation of one or more
//! sprite attributes: zoom, a sign-flipping squash, opacity, rotation, color
//! multipliers or position. Effects are declared with [`EffectOptions`],
//! attached to a clip, and evaluated by that clip's [`EffectStack`] on every
//! tick of the owning sprite.
//!
//! # Playback Modes
//!
//! - **One-way**: the attribute sweeps linearly from its baseline (or the
//!   configured start value) to the target over the duration.
//! - **Go-back**: the sweep runs out during the first half of the duration
//!   and back during the second, ending where it started.
//! - **Repeat**: at the end of each cycle the stack re-arms the effect in
//!   its own slot, restarting from the pre-effect baseline. Insertion order
//!   never changes, so the paint order of compounded transforms is stable
//!   across cycles.
//!
//! # Completion Semantics
//!
//! The evaluation that first reaches the end of the window snaps the
//! animated attributes to the exact cycle endpoint and reports the cycle;
//! the sprite then fires the configured callback, once per completed cycle
//! (every repeat). A finished non-repeating effect is inert: it writes
//! nothing and its callback does not fire again. Zero-duration effects
//! complete on their very first evaluation.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use flipbook_core::anim::{Axis, EffectKind, EffectOptions, ImageSource, Sprite};
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
//! // a one-second horizontal flip, repeated forever
//! sprite.add_effect(
//! 	EffectOptions::new(
//! 		EffectKind::Flip {
//! 			axis: Axis::X,
//! 		},
//! 		Duration::from_millis(1000),
//! 	)
//! 	.with_repeat(),
//! )?;
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod kind;
pub mod options;
pub mod runtime;
pub mod stack;


// Re-exports for convenience
pub use self::kind::{Axis, EffectKind};
pub use self::options::{EffectCallback, EffectOptions};
pub use self::runtime::Effect;
pub use self::stack::EffectStack;
