//! Benchmark helper utilities for flipbook-rs
//!
//! This module provides utilities for generating synthetic sprites and common
//! benchmark helpers for the flipbook-rs project.
//!
//! The benchmarks drive the same entry point a real render loop would:
//! `Sprite::tick` with a monotonic instant, on sprites carrying effect
//! stacks of various depths.

use std::time::Duration;

use flipbook_core::prelude::*;

/// A dimension-only image handle; benchmarks never touch pixels.
pub struct BenchStrip {
	width: u32,
	height: u32,
}

impl BenchStrip {
	/// Creates a handle for a strip of `frames` frames of `width`×`height`.
	pub fn new(frames: u32, width: u32, height: u32) -> Self {
		Self {
			width: frames * width,
			height,
		}
	}
}

impl ImageSource for BenchStrip {
	fn dimensions(&self) -> (u32, u32) {
		(self.width, self.height)
	}
}

/// Builds a sprite with one 8-frame clip and `effects` stacked effects.
///
/// The stack cycles through the effect kinds so depth benchmarks exercise
/// every evaluation path, all repeating so the stack never goes inert.
pub fn sprite_with_effects(effects: usize) -> Sprite<BenchStrip> {
	let mut sprite = Sprite::new();
	sprite
		.register_clip(DEFAULT_CLIP, BenchStrip::new(8, 32, 32), Duration::from_millis(800), 8)
		.expect("valid bench clip");
	sprite.speed = 1.5;
	sprite.direction = 30.0;

	for index in 0..effects {
		let kind = match index % 6 {
			0 => EffectKind::Scale {
				target: 2.0,
			},
			1 => EffectKind::Flip {
				axis: Axis::X,
			},
			2 => EffectKind::Fade {
				from: 1.0,
				to: 0.2,
			},
			3 => EffectKind::Turn {
				angle: 180.0,
				clockwise: index % 2 == 0,
			},
			4 => EffectKind::Hue {
				red: Some(0.5),
				green: None,
				blue: Some(0.8),
			},
			_ => EffectKind::Move {
				x: Some(100.0),
				y: Some(100.0),
			},
		};

		sprite
			.add_effect(
				EffectOptions::new(kind, Duration::from_millis(500 + index as u64 * 50))
					.with_go_back()
					.with_repeat(),
			)
			.expect("valid bench effect");
	}

	sprite
}

/// Common stack depths for synthetic benchmarks
pub mod depths {
	/// A lone effect, the common case
	pub const SINGLE: usize = 1;
	/// A handful of compounded effects
	pub const SMALL: usize = 4;
	/// A busy sprite
	pub const MEDIUM: usize = 16;
	/// Worst-case stacking
	pub const LARGE: usize = 64;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sprite_with_effects() {
		let sprite = sprite_with_effects(depths::SMALL);
		assert_eq!(sprite.effects().expect("clip selected").len(), 4);
		assert_eq!(sprite.frame_width().expect("clip selected"), 32);
	}

	#[test]
	fn test_depth_constants() {
		assert!(depths::SINGLE < depths::SMALL);
		assert!(depths::SMALL < depths::MEDIUM);
		assert!(depths::MEDIUM < depths::LARGE);
	}
}
