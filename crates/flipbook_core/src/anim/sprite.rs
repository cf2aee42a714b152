//! Sprites: on-screen entities owning clips, effects and transform state.
//!
//! A sprite is created once by the caller and mutated every rendered frame
//! through [`Sprite::tick`]; the engine never destroys it. Clips are
//! registered under string labels, one of which is selected at a time;
//! effects attached to a non-selected clip stay dormant in memory and are
//! not evaluated.
//!
//! # Lifecycle
//!
//! ```text
//! Stopped ──start()──▶ Running ──pause()──▶ Paused
//!    ▲                    │
//!    └──────stop()────────┘
//!
//! run_once(cb): as start(), then on the last frame the sprite hides,
//! stepping stops and cb fires exactly once.
//! ```

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;

use super::DEFAULT_CLIP;
use super::backend::{FrameOutput, ImageSource};
use super::clip::{Clip, StepEvent};
use super::effect::runtime::Effect;
use super::effect::{EffectOptions, EffectStack};
use super::error::AnimError;
use super::transform::Transform;

/// One animated on-screen entity.
///
/// Position, movement and playback state are plain fields; clip and effect
/// management go through methods so that configuration errors surface
/// immediately.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use flipbook_core::anim::{ImageSource, Sprite};
///
/// struct Strip(u32, u32);
///
/// impl ImageSource for Strip {
/// 	fn dimensions(&self) -> (u32, u32) {
/// 		(self.0, self.1)
/// 	}
/// }
///
/// # fn main() -> Result<(), flipbook_core::anim::AnimError> {
/// let mut sprite = Sprite::new();
/// sprite.register_clip("default", Strip(96, 24), Duration::from_millis(700), 6)?;
/// sprite.speed = 2.0;
/// sprite.direction = 90.0; // straight up
/// sprite.start()?;
///
/// let frame = sprite.tick(Instant::now())?.expect("visible after start");
/// assert_eq!(frame.transform.y, -2.0);
/// # Ok(())
/// # }
/// ```
pub struct Sprite<I> {
	/// Visual attribute bag, written by effects and read by the backend
	pub transform: Transform,

	/// Movement speed in pixels per tick
	pub speed: f64,

	/// Movement direction in degrees; 0 points along +x, angles grow
	/// counter-clockwise, and the y axis points down (screen coordinates)
	pub direction: f64,

	/// Whether frame stepping is running
	pub animated: bool,

	current_clip: String,
	clips: HashMap<String, Clip<I>>,
}

impl<I> Sprite<I> {
	/// Creates a sprite with no clips, selecting [`DEFAULT_CLIP`].
	pub fn new() -> Self {
		Self {
			transform: Transform::new(),
			speed: 0.0,
			direction: 0.0,
			animated: true,
			current_clip: DEFAULT_CLIP.to_string(),
			clips: HashMap::new(),
		}
	}

	/// Returns the label of the selected clip.
	#[inline]
	pub fn current_clip(&self) -> &str {
		&self.current_clip
	}

	/// Returns `true` if a clip is registered under `label`.
	pub fn has_clip(&self, label: &str) -> bool {
		self.clips.contains_key(label)
	}

	/// Returns the clip registered under `label`, if any.
	pub fn clip(&self, label: &str) -> Option<&Clip<I>> {
		self.clips.get(label)
	}

	/// Selects the clip to display and advance.
	///
	/// Effects of the previously selected clip stay dormant until it is
	/// selected again.
	///
	/// # Errors
	///
	/// Fails fast with [`AnimError::UnknownClip`] if `label` was never
	/// registered.
	pub fn select_clip(&mut self, label: &str) -> Result<(), AnimError> {
		if !self.clips.contains_key(label) {
			return Err(AnimError::UnknownClip {
				label: label.to_string(),
			});
		}
		self.current_clip = label.to_string();
		Ok(())
	}

	/// Returns the pixel width of one frame of the selected clip.
	pub fn frame_width(&self) -> Result<u32, AnimError> {
		self.selected().map(Clip::frame_width)
	}

	/// Returns the pixel height of one frame of the selected clip.
	pub fn frame_height(&self) -> Result<u32, AnimError> {
		self.selected().map(Clip::frame_height)
	}

	/// Starts playback of the selected clip: rewind, show, resume.
	pub fn start(&mut self) -> Result<(), AnimError> {
		self.reset()?;
		self.transform.show();
		self.resume();
		Ok(())
	}

	/// Starts playback of the selected clip for a single pass.
	///
	/// When the last frame has been displayed the sprite hides itself,
	/// stepping stops, the clip's effect stack is cleared and `callback`
	/// fires exactly once with the sprite.
	pub fn run_once(
		&mut self,
		callback: impl FnOnce(&mut Sprite<I>) + 'static,
	) -> Result<(), AnimError> {
		let label = self.current_clip.clone();
		let clip = self.selected_mut()?;
		clip.arm_run_once(Box::new(callback));
		debug!("clip {label:?} armed to run once");
		self.start()
	}

	/// Stops playback: rewind, pause, and clear the clip's effect stack.
	///
	/// Visibility is unchanged.
	pub fn stop(&mut self) -> Result<(), AnimError> {
		let clip = self.selected_mut()?;
		clip.reset();
		clip.effects_mut().clear();
		self.pause();
		Ok(())
	}

	/// Rewinds the selected clip to its first frame.
	pub fn reset(&mut self) -> Result<(), AnimError> {
		self.selected_mut()?.reset();
		Ok(())
	}

	/// Suspends frame stepping; effects keep evaluating.
	#[inline]
	pub fn pause(&mut self) {
		self.animated = false;
	}

	/// Resumes frame stepping.
	#[inline]
	pub fn resume(&mut self) {
		self.animated = true;
	}

	/// Toggles frame stepping.
	#[inline]
	pub fn toggle_animation(&mut self) {
		self.animated = !self.animated;
	}

	/// Makes the sprite visible.
	#[inline]
	pub fn show(&mut self) {
		self.transform.show();
	}

	/// Hides the sprite; a hidden sprite's tick is a no-op.
	#[inline]
	pub fn hide(&mut self) {
		self.transform.hide();
	}

	/// Toggles visibility.
	#[inline]
	pub fn toggle_visibility(&mut self) {
		self.transform.toggle_visibility();
	}

	/// Attaches an effect to the clip named in `options`, snapshotting the
	/// targeted attributes now.
	///
	/// Returns the effect's slot index in the clip's stack. Slots are
	/// append-only: the index stays valid for the sprite's lifetime and can
	/// be handed to [`replace_effect`](Self::replace_effect) to overwrite
	/// the effect in place.
	///
	/// # Errors
	///
	/// Fails fast with [`AnimError::UnknownClip`] if the targeted clip was
	/// never registered.
	pub fn add_effect(&mut self, options: EffectOptions<I>) -> Result<usize, AnimError> {
		let effect = Effect::new(
			options.kind,
			options.duration,
			options.go_back,
			options.repeat,
			&self.transform,
		);
		let label = options.clip().to_string();
		let Some(clip) = self.clips.get_mut(&label) else {
			return Err(AnimError::UnknownClip {
				label,
			});
		};
		let index = clip.effects_mut().add(effect, options.callback);
		debug!("clip {label:?} slot {index}: added {effect}");
		Ok(index)
	}

	/// Overwrites the effect slot `index` of the clip named in `options`.
	///
	/// This is the only way to stop a single effect without stopping the
	/// whole clip.
	///
	/// # Errors
	///
	/// Fails with [`AnimError::UnknownClip`] for an unregistered clip label
	/// and [`AnimError::SlotOutOfRange`] for a slot that was never added.
	pub fn replace_effect(
		&mut self,
		index: usize,
		options: EffectOptions<I>,
	) -> Result<(), AnimError> {
		let effect = Effect::new(
			options.kind,
			options.duration,
			options.go_back,
			options.repeat,
			&self.transform,
		);
		let label = options.clip().to_string();
		let Some(clip) = self.clips.get_mut(&label) else {
			return Err(AnimError::UnknownClip {
				label,
			});
		};
		clip.effects_mut().replace(index, effect, options.callback)
	}

	/// Returns the selected clip's effect stack.
	pub fn effects(&self) -> Result<&EffectStack<I>, AnimError> {
		self.selected().map(Clip::effects)
	}

	fn selected(&self) -> Result<&Clip<I>, AnimError> {
		self.clips.get(&self.current_clip).ok_or_else(|| AnimError::UnknownClip {
			label: self.current_clip.clone(),
		})
	}

	fn selected_mut(&mut self) -> Result<&mut Clip<I>, AnimError> {
		self.clips.get_mut(&self.current_clip).ok_or_else(|| AnimError::UnknownClip {
			label: self.current_clip.clone(),
		})
	}
}

impl<I: ImageSource> Sprite<I> {
	/// Registers a clip under `label`, cut from `image` into `frame_count`
	/// equal-width steps.
	///
	/// The image handle must already be decoded by the rendering backend;
	/// only its pixel dimensions are inspected, once, here. Registering an
	/// existing label replaces the clip, dropping its effect stack.
	///
	/// # Errors
	///
	/// Fails fast, holding no partially-constructed clip, when
	/// `frame_count` is zero ([`AnimError::InvalidFrameCount`]) or the strip
	/// is too small to cut `frame_count` frames from
	/// ([`AnimError::EmptyImage`]).
	pub fn register_clip(
		&mut self,
		label: impl Into<String>,
		image: I,
		total_duration: Duration,
		frame_count: u32,
	) -> Result<(), AnimError> {
		let label = label.into();
		if frame_count == 0 {
			return Err(AnimError::InvalidFrameCount {
				label,
			});
		}

		let (width, height) = image.dimensions();
		if width / frame_count == 0 || height == 0 {
			return Err(AnimError::EmptyImage {
				label,
				width,
				height,
				frame_count,
			});
		}

		let clip = Clip::new(image, total_duration, frame_count);
		debug!("registered clip {label:?}: {clip}");
		self.clips.insert(label, clip);
		Ok(())
	}

	/// Advances the sprite by one rendered frame.
	///
	/// This is the single per-frame entry point, to be called once per
	/// render callback with a monotonic instant. In order: movement
	/// integration, effect evaluation (selected clip only, insertion
	/// order), output snapshot, then frame stepping — so the returned
	/// frame is the one to draw *now*, and any advance becomes visible on
	/// the next tick.
	///
	/// Returns `None` while the sprite is hidden: nothing is integrated,
	/// evaluated or advanced, matching a renderer that skips the draw call
	/// entirely.
	///
	/// # Errors
	///
	/// Fails with [`AnimError::UnknownClip`] if the selected clip was never
	/// registered.
	pub fn tick(&mut self, now: Instant) -> Result<Option<FrameOutput>, AnimError> {
		if !self.transform.visible {
			// still surface a broken selection instead of hiding it forever
			self.selected()?;
			return Ok(None);
		}

		// movement integration: before effects, independent of them
		let radians = self.direction.to_radians();
		self.transform.x += self.speed * radians.cos();
		self.transform.y -= self.speed * radians.sin();

		// field-level borrow: the clip entry and the transform are disjoint
		let label = self.current_clip.clone();
		let Some(clip) = self.clips.get_mut(&label) else {
			return Err(AnimError::UnknownClip {
				label,
			});
		};
		let completed = clip.effects_mut().apply(&mut self.transform, now);

		let output = FrameOutput {
			frame_index: clip.current_frame(),
			source_rect: clip.source_rect(),
			transform: self.transform,
		};

		let event = if self.animated {
			clip.step(now)
		} else {
			StepEvent::Idle
		};

		let completion = if event == StepEvent::Completed {
			clip.effects_mut().clear();
			clip.take_completion_callback()
		} else {
			None
		};

		// fire per-cycle effect callbacks with the clip borrow released
		for index in completed {
			let callback = self
				.clips
				.get_mut(&label)
				.and_then(|clip| clip.effects_mut().take_callback(index));
			let Some(mut callback) = callback else {
				continue;
			};
			callback(self);
			if let Some(clip) = self.clips.get_mut(&label) {
				clip.effects_mut().restore_callback(index, callback);
			}
		}

		if event == StepEvent::Completed {
			self.animated = false;
			self.transform.hide();
			debug!("run-once clip {label:?} finished");
			if let Some(callback) = completion {
				callback(self);
			}
		}

		Ok(Some(output))
	}
}

impl<I> Default for Sprite<I> {
	fn default() -> Self {
		Self::new()
	}
}
