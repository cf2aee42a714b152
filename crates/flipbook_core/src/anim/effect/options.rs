//! Effect configuration.
//!
//! [`EffectOptions`] is immutable after construction: build it with the
//! chaining constructors, hand it to
//! [`Sprite::add_effect`](crate::anim::Sprite::add_effect), and the sprite
//! snapshots the targeted attributes into a runtime [`Effect`](super::Effect)
//! at that moment.

use std::time::Duration;

use crate::anim::DEFAULT_CLIP;
use crate::anim::sprite::Sprite;

use super::kind::EffectKind;

/// Callback fired once per completed effect cycle, every repeat.
///
/// Receives the owning sprite after the cycle's endpoint has been written.
pub type EffectCallback<I> = Box<dyn FnMut(&mut Sprite<I>)>;

/// Configuration for one effect instance.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use flipbook_core::anim::{EffectKind, EffectOptions, ImageSource, Sprite};
/// # struct Strip(u32, u32);
/// # impl ImageSource for Strip {
/// # 	fn dimensions(&self) -> (u32, u32) {
/// # 		(self.0, self.1)
/// # 	}
/// # }
///
/// # fn main() -> Result<(), flipbook_core::anim::AnimError> {
/// let mut sprite = Sprite::new();
/// sprite.register_clip("jump", Strip(64, 16), Duration::from_millis(400), 4)?;
///
/// // fade the jump clip out and back in, twice per second, forever
/// let slot = sprite.add_effect(
/// 	EffectOptions::new(
/// 		EffectKind::Fade {
/// 			from: 1.0,
/// 			to: 0.1,
/// 		},
/// 		Duration::from_millis(500),
/// 	)
/// 	.with_clip("jump")
/// 	.with_go_back()
/// 	.with_repeat(),
/// )?;
/// assert_eq!(slot, 0);
/// # Ok(())
/// # }
/// ```
pub struct EffectOptions<I> {
	pub(crate) clip: Option<String>,
	pub(crate) kind: EffectKind,
	pub(crate) duration: Duration,
	pub(crate) repeat: bool,
	pub(crate) go_back: bool,
	pub(crate) callback: Option<EffectCallback<I>>,
}

impl<I> EffectOptions<I> {
	/// Creates options for one cycle of `kind` over `duration`, targeting
	/// the [`DEFAULT_CLIP`], playing one-way, without repeat or callback.
	pub fn new(kind: EffectKind, duration: Duration) -> Self {
		Self {
			clip: None,
			kind,
			duration,
			repeat: false,
			go_back: false,
			callback: None,
		}
	}

	/// Targets a specific clip instead of the default one.
	#[must_use]
	pub fn with_clip(mut self, label: impl Into<String>) -> Self {
		self.clip = Some(label.into());
		self
	}

	/// Re-arms the effect from its baseline at the end of every cycle,
	/// indefinitely.
	#[must_use]
	pub fn with_repeat(mut self) -> Self {
		self.repeat = true;
		self
	}

	/// Plays forward then reverses within the same duration (round trip).
	#[must_use]
	pub fn with_go_back(mut self) -> Self {
		self.go_back = true;
		self
	}

	/// Installs a callback fired once per completed cycle, every repeat.
	#[must_use]
	pub fn with_callback(mut self, callback: impl FnMut(&mut Sprite<I>) + 'static) -> Self {
		self.callback = Some(Box::new(callback));
		self
	}

	/// Returns the targeted clip label.
	pub fn clip(&self) -> &str {
		self.clip.as_deref().unwrap_or(DEFAULT_CLIP)
	}

	/// Returns the effect kind and parameters.
	#[inline]
	pub fn kind(&self) -> &EffectKind {
		&self.kind
	}

	/// Returns the cycle duration.
	#[inline]
	pub fn duration(&self) -> Duration {
		self.duration
	}

	/// Returns `true` if the effect repeats forever.
	#[inline]
	pub fn repeats(&self) -> bool {
		self.repeat
	}

	/// Returns `true` if the effect plays there and back.
	#[inline]
	pub fn goes_back(&self) -> bool {
		self.go_back
	}
}
