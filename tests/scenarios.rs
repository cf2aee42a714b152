//! End-to-end scenarios for `flipbook-rs`, driven through the public facade.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use flipbook_rs::prelude::*;

struct Strip(u32, u32);

impl ImageSource for Strip {
	fn dimensions(&self) -> (u32, u32) {
		(self.0, self.1)
	}
}

fn ms(millis: u64) -> Duration {
	Duration::from_millis(millis)
}

#[test_log::test]
fn test_four_frame_clip_shows_frame_two_after_250ms() {
	let mut sprite = Sprite::new();
	sprite
		.register_clip(DEFAULT_CLIP, Strip(64, 16), ms(400), 4)
		.expect("valid clip");
	sprite.start().expect("start");

	// per-frame duration is 400 / 4 = 100ms
	assert_eq!(sprite.clip(DEFAULT_CLIP).expect("registered").frame_duration(), ms(100));

	let t0 = Instant::now();
	let mut last = None;
	for elapsed in (0..=250).step_by(10) {
		last = sprite.tick(t0 + ms(elapsed)).expect("tick");
	}

	let frame = last.expect("sprite is visible");
	assert_eq!(frame.frame_index, 2);
	assert_eq!(frame.source_rect, SourceRect {
		x: 32,
		y: 0,
		width: 16,
		height: 16,
	});
}

#[test_log::test]
fn test_looping_clip_wraps_to_anchor() {
	let mut sprite = Sprite::new();
	sprite
		.register_clip(DEFAULT_CLIP, Strip(64, 16), ms(400), 4)
		.expect("valid clip");
	sprite.start().expect("start");

	let t0 = Instant::now();
	for elapsed in (0..=400).step_by(100) {
		sprite.tick(t0 + ms(elapsed)).expect("tick");
	}

	// the advance past the last frame wrapped back to the anchor
	let frame = sprite.tick(t0 + ms(410)).expect("tick").expect("visible");
	assert_eq!(frame.frame_index, 0);
	assert!(sprite.transform.visible);
	assert!(sprite.animated);
}

#[test_log::test]
fn test_run_once_hides_sprite_and_fires_exactly_once() {
	let fired = Rc::new(Cell::new(0u32));
	let counter = Rc::clone(&fired);

	let mut sprite = Sprite::new();
	sprite
		.register_clip(DEFAULT_CLIP, Strip(90, 20), ms(500), 9)
		.expect("valid clip");
	sprite
		.run_once(move |_sprite| counter.set(counter.get() + 1))
		.expect("run once");

	let t0 = Instant::now();
	let mut outputs = 0;
	for elapsed in (0..=700).step_by(25) {
		if sprite.tick(t0 + ms(elapsed)).expect("tick").is_some() {
			outputs += 1;
		}
	}

	assert_eq!(fired.get(), 1, "completion callback fires exactly once");
	assert!(!sprite.transform.visible, "finished run-once clip hides the sprite");
	assert!(!sprite.animated);
	// ticks after completion return no frame
	assert!(outputs < 29);
}

#[test_log::test]
fn test_walking_with_breathing_effect() {
	let mut sprite = Sprite::new();
	sprite
		.register_clip("walk-right", Strip(96, 24), ms(700), 6)
		.expect("valid clip");
	sprite.select_clip("walk-right").expect("select");
	sprite.speed = 2.0;
	sprite.direction = 0.0;
	sprite.start().expect("start");

	sprite
		.add_effect(
			EffectOptions::new(
				EffectKind::Scale {
					target: 1.5,
				},
				ms(1000),
			)
			.with_clip("walk-right")
			.with_go_back()
			.with_repeat(),
		)
		.expect("add effect");

	let t0 = Instant::now();
	sprite.tick(t0).expect("tick");
	let frame = sprite.tick(t0 + ms(500)).expect("tick").expect("visible");

	// two ticks of movement integration at 2 px/tick along +x
	assert_eq!(frame.transform.x, 4.0);
	assert_eq!(frame.transform.y, 0.0);

	// halfway through a go-back scale cycle sits on the target
	assert_eq!(frame.transform.zoom_x, 1.5);
	assert_eq!(frame.transform.zoom_y, 1.5);
}

#[test_log::test]
fn test_frame_output_serializes_for_inspection() {
	let mut sprite = Sprite::new();
	sprite
		.register_clip(DEFAULT_CLIP, Strip(64, 16), ms(400), 4)
		.expect("valid clip");
	sprite.start().expect("start");

	let frame = sprite.tick(Instant::now()).expect("tick").expect("visible");
	let json = serde_json::to_value(frame).expect("serializable");

	assert_eq!(json["frame_index"], 0);
	assert_eq!(json["source_rect"]["width"], 16);
	assert_eq!(json["transform"]["alpha"], 1.0);
}

#[test_log::test]
fn test_center_coordinates_shift_draw_origin() {
	let mut sprite = Sprite::new();
	sprite
		.register_clip(DEFAULT_CLIP, Strip(64, 16), ms(400), 4)
		.expect("valid clip");
	sprite.transform.set_position(100.0, 100.0);
	sprite.transform.center_coordinates = true;
	sprite.start().expect("start");

	let frame = sprite.tick(Instant::now()).expect("tick").expect("visible");
	assert_eq!(frame.origin(), (92.0, 92.0));
}

#[test_log::test]
fn test_switching_clips_keeps_each_stepper_state() {
	let mut sprite = Sprite::new();
	sprite
		.register_clip("walk-left", Strip(96, 24), ms(600), 6)
		.expect("valid clip");
	sprite
		.register_clip("walk-right", Strip(96, 24), ms(600), 6)
		.expect("valid clip");
	sprite.select_clip("walk-left").expect("select");
	sprite.start().expect("start");

	let t0 = Instant::now();
	sprite.tick(t0).expect("tick");
	sprite.tick(t0 + ms(100)).expect("tick");
	assert_eq!(sprite.clip("walk-left").expect("registered").current_frame(), 1);

	// the other clip never advanced
	sprite.select_clip("walk-right").expect("select");
	let frame = sprite.tick(t0 + ms(110)).expect("tick").expect("visible");
	assert_eq!(frame.frame_index, 0);
}
