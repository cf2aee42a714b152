//! Animation clips and the frame stepper.
//!
//! A clip is a named sequence of equal-width frames cut from a single
//! horizontal image strip, plus the per-clip state machine that decides which
//! frame is showing at any instant.
//!
//! # Frame Stepper
//!
//! The stepper advances on a wall-clock cadence: whenever the instant passed
//! to [`Sprite::tick`](super::sprite::Sprite::tick) is at least one per-frame
//! duration past the last frame change, the index advances by one. Passing
//! the last valid index either wraps back to the first-frame anchor (looping
//! clips) or finishes the clip (run-once clips: the sprite is hidden, frame
//! stepping stops and the completion callback fires exactly once).
//!
//! A skipped render call skips the corresponding advance; there is no
//! catch-up. Correctness is defined in wall-clock terms, not frame counts.
//!
//! # Degenerate Timing
//!
//! A zero per-frame duration (zero total duration, or a total shorter than
//! the frame count in milliseconds) advances one frame per tick: the advance
//! deadline is always in the past. A one-frame clip therefore never shows
//! anything but its anchor frame, and a zero-duration run-once clip with `N`
//! frames finishes after `N` ticks.

use std::time::{Duration, Instant};

use super::backend::{ImageSource, SourceRect};
use super::effect::EffectStack;
use super::sprite::Sprite;

/// Callback invoked once when a run-once clip reaches its last frame.
///
/// Receives the owning sprite, after the sprite has been hidden and frame
/// stepping has stopped.
pub type CompletionCallback<I> = Box<dyn FnOnce(&mut Sprite<I>)>;

/// Outcome of one stepper advance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepEvent {
	/// The per-frame duration has not elapsed yet
	Idle,
	/// The index advanced to the next frame
	Advanced,
	/// The index passed the last frame and wrapped back to the anchor
	Wrapped,
	/// A run-once clip passed its last frame
	Completed,
}

/// One named animation clip: an image strip, its frame geometry and timing,
/// the stepper state, and the clip's effect stack.
///
/// Clips are created through
/// [`Sprite::register_clip`](super::sprite::Sprite::register_clip) and owned
/// by their sprite; the per-frame duration is the total duration divided by
/// the frame count, truncated to whole nanoseconds.
pub struct Clip<I> {
	image: I,
	frame_count: u32,
	frame_width: u32,
	frame_height: u32,
	total_duration: Duration,
	frame_duration: Duration,
	current_frame: u32,
	first_frame: u32,
	run_once: bool,
	on_complete: Option<CompletionCallback<I>>,
	frame_started_at: Option<Instant>,
	effects: EffectStack<I>,
}

impl<I: ImageSource> Clip<I> {
	pub(crate) fn new(image: I, total_duration: Duration, frame_count: u32) -> Self {
		let (width, height) = image.dimensions();
		debug_assert!(frame_count > 0, "frame count validated at registration");

		Self {
			image,
			frame_count,
			frame_width: width / frame_count,
			frame_height: height,
			total_duration,
			frame_duration: total_duration / frame_count,
			current_frame: 0,
			first_frame: 0,
			run_once: false,
			on_complete: None,
			frame_started_at: None,
			effects: EffectStack::new(),
		}
	}
}

impl<I> Clip<I> {
	/// Returns a reference to the backend image handle.
	#[inline]
	pub fn image(&self) -> &I {
		&self.image
	}

	/// Returns the number of frames in the strip.
	#[inline]
	pub fn frame_count(&self) -> u32 {
		self.frame_count
	}

	/// Returns the width of one frame in pixels.
	#[inline]
	pub fn frame_width(&self) -> u32 {
		self.frame_width
	}

	/// Returns the height of one frame in pixels.
	#[inline]
	pub fn frame_height(&self) -> u32 {
		self.frame_height
	}

	/// Returns the total playback duration of one pass over the strip.
	#[inline]
	pub fn total_duration(&self) -> Duration {
		self.total_duration
	}

	/// Returns the display duration of a single frame.
	#[inline]
	pub fn frame_duration(&self) -> Duration {
		self.frame_duration
	}

	/// Returns the index of the frame currently showing.
	#[inline]
	pub fn current_frame(&self) -> u32 {
		self.current_frame
	}

	/// Returns the loop anchor: the index playback starts from and wraps to.
	#[inline]
	pub fn first_frame(&self) -> u32 {
		self.first_frame
	}

	/// Sets the loop anchor.
	///
	/// The anchor is clamped to the last valid index so the stepper invariant
	/// `current_frame < frame_count` holds after the next wrap.
	pub fn set_first_frame(&mut self, index: u32) {
		self.first_frame = index.min(self.frame_count - 1);
	}

	/// Returns `true` if this clip terminates after one pass.
	#[inline]
	pub fn is_run_once(&self) -> bool {
		self.run_once
	}

	/// Returns the source sub-rectangle of the frame currently showing.
	pub fn source_rect(&self) -> SourceRect {
		SourceRect {
			x: self.current_frame * self.frame_width,
			y: 0,
			width: self.frame_width,
			height: self.frame_height,
		}
	}

	/// Returns a reference to the clip's effect stack.
	#[inline]
	pub fn effects(&self) -> &EffectStack<I> {
		&self.effects
	}

	pub(crate) fn effects_mut(&mut self) -> &mut EffectStack<I> {
		&mut self.effects
	}

	/// Rewinds the stepper to the anchor frame.
	///
	/// The effect stack and the run-once flag are untouched; the next tick
	/// re-anchors the frame-change timer.
	pub(crate) fn reset(&mut self) {
		self.current_frame = self.first_frame;
		self.frame_started_at = None;
	}

	pub(crate) fn arm_run_once(&mut self, callback: CompletionCallback<I>) {
		self.run_once = true;
		self.on_complete = Some(callback);
	}

	pub(crate) fn take_completion_callback(&mut self) -> Option<CompletionCallback<I>> {
		self.on_complete.take()
	}

	/// Advances the displayed frame if its duration elapsed.
	///
	/// Called once per render tick while the sprite is animated. The
	/// frame-change time is recorded only on an actual advance, so a tick
	/// that arrives early does not shift the cadence.
	pub(crate) fn step(&mut self, now: Instant) -> StepEvent {
		let started = *self.frame_started_at.get_or_insert(now);
		if now.duration_since(started) < self.frame_duration {
			return StepEvent::Idle;
		}

		self.current_frame += 1;
		self.frame_started_at = Some(now);

		if self.current_frame >= self.frame_count {
			self.current_frame = self.first_frame;
			if self.run_once {
				return StepEvent::Completed;
			}
			return StepEvent::Wrapped;
		}

		StepEvent::Advanced
	}
}

impl<I> std::fmt::Display for Clip<I> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Clip({} frames of {}×{}, {:?}/frame)",
			self.frame_count, self.frame_width, self.frame_height, self.frame_duration
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Strip(u32, u32);

	impl ImageSource for Strip {
		fn dimensions(&self) -> (u32, u32) {
			(self.0, self.1)
		}
	}

	fn clip(frames: u32, total_ms: u64) -> Clip<Strip> {
		Clip::new(Strip(frames * 16, 24), Duration::from_millis(total_ms), frames)
	}

	#[test]
	fn test_frame_geometry() {
		let c = clip(4, 400);
		assert_eq!(c.frame_width(), 16);
		assert_eq!(c.frame_height(), 24);
		assert_eq!(c.frame_duration(), Duration::from_millis(100));
	}

	#[test]
	fn test_source_rect_advances_with_frame() {
		let mut c = clip(4, 400);
		let t0 = Instant::now();
		assert_eq!(c.step(t0), StepEvent::Idle);
		assert_eq!(c.source_rect().x, 0);

		assert_eq!(c.step(t0 + Duration::from_millis(100)), StepEvent::Advanced);
		assert_eq!(c.source_rect().x, 16);
		assert_eq!(c.source_rect().width, 16);
	}

	#[test]
	fn test_wraps_to_anchor() {
		let mut c = clip(2, 200);
		let t0 = Instant::now();
		c.step(t0);
		assert_eq!(c.step(t0 + Duration::from_millis(100)), StepEvent::Advanced);
		assert_eq!(c.current_frame(), 1);
		assert_eq!(c.step(t0 + Duration::from_millis(200)), StepEvent::Wrapped);
		assert_eq!(c.current_frame(), 0);
	}

	#[test]
	fn test_early_tick_does_not_advance() {
		let mut c = clip(4, 400);
		let t0 = Instant::now();
		c.step(t0);
		assert_eq!(c.step(t0 + Duration::from_millis(99)), StepEvent::Idle);
		assert_eq!(c.current_frame(), 0);
	}

	#[test]
	fn test_zero_duration_advances_every_tick() {
		let mut c = clip(3, 0);
		let t0 = Instant::now();
		assert_eq!(c.step(t0), StepEvent::Advanced);
		assert_eq!(c.step(t0), StepEvent::Advanced);
		assert_eq!(c.step(t0), StepEvent::Wrapped);
		assert_eq!(c.current_frame(), 0);
	}

	#[test]
	fn test_one_frame_clip_stays_on_anchor() {
		let mut c = clip(1, 0);
		let t0 = Instant::now();
		for _ in 0..5 {
			c.step(t0);
			assert_eq!(c.current_frame(), 0);
		}
	}

	#[test]
	fn test_custom_anchor() {
		let mut c = clip(4, 0);
		c.set_first_frame(2);
		c.reset();
		assert_eq!(c.current_frame(), 2);

		let t0 = Instant::now();
		assert_eq!(c.step(t0), StepEvent::Advanced);
		assert_eq!(c.current_frame(), 3);
		assert_eq!(c.step(t0), StepEvent::Wrapped);
		assert_eq!(c.current_frame(), 2);
	}
}
