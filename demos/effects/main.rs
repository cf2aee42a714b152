//! Headless effect showcase.
//!
//! Twelve sprites, one effect configuration each — inflate, deflate,
//! breathe, flips, fades and turns — ticked on a shared cadence. Every
//! sprite's frame output can be dumped as JSON for inspection:
//!
//! ```text
//! cargo run --example effects -- --seconds 4 --json
//! ```

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use flipbook_rs::prelude::*;
use image::{Rgba, RgbaImage};
use log::info;

#[derive(Parser)]
#[command(name = "effects")]
#[command(author = "flipbook-rs project")]
#[command(version)]
#[command(about = "Showcase every effect kind without a window", long_about = None)]
struct Cli {
	/// How long to run the simulation
	#[arg(long, default_value_t = 4)]
	seconds: u64,

	/// Render callbacks per second
	#[arg(long, default_value_t = 30)]
	fps: u32,

	/// Dump each sampled frame output as a JSON line
	#[arg(long, default_value_t = false)]
	json: bool,
}

struct Strip(RgbaImage);

impl ImageSource for Strip {
	fn dimensions(&self) -> (u32, u32) {
		self.0.dimensions()
	}
}

fn single_frame() -> Strip {
	Strip(RgbaImage::from_pixel(24, 24, Rgba([180, 180, 180, 255])))
}

fn showcase() -> Vec<(&'static str, EffectOptions<Strip>)> {
	let second = Duration::from_millis(1000);
	let two_seconds = Duration::from_millis(2000);

	vec![
		("inflate", EffectOptions::new(EffectKind::Scale { target: 2.0 }, two_seconds).with_repeat()),
		("deflate", EffectOptions::new(EffectKind::Scale { target: 0.5 }, two_seconds).with_repeat()),
		(
			"breathe",
			EffectOptions::new(EffectKind::Scale { target: 1.3 }, second).with_repeat().with_go_back(),
		),
		("flip-x", EffectOptions::new(EffectKind::Flip { axis: Axis::X }, second).with_repeat()),
		(
			"flip-x-back",
			EffectOptions::new(EffectKind::Flip { axis: Axis::X }, second)
				.with_repeat()
				.with_go_back(),
		),
		("flip-y", EffectOptions::new(EffectKind::Flip { axis: Axis::Y }, second).with_repeat()),
		(
			"flip-y-back",
			EffectOptions::new(EffectKind::Flip { axis: Axis::Y }, second)
				.with_repeat()
				.with_go_back(),
		),
		(
			"fade",
			EffectOptions::new(
				EffectKind::Fade {
					from: 1.0,
					to: 0.5,
				},
				second,
			)
			.with_repeat(),
		),
		(
			"fade-in-out",
			EffectOptions::new(
				EffectKind::Fade {
					from: 1.0,
					to: 0.1,
				},
				two_seconds,
			)
			.with_repeat()
			.with_go_back(),
		),
		(
			"turn",
			EffectOptions::new(
				EffectKind::Turn {
					angle: 90.0,
					clockwise: false,
				},
				two_seconds,
			)
			.with_repeat(),
		),
		(
			"turn-back",
			EffectOptions::new(
				EffectKind::Turn {
					angle: 90.0,
					clockwise: false,
				},
				two_seconds,
			)
			.with_repeat()
			.with_go_back(),
		),
		(
			"turn-back-cw",
			EffectOptions::new(
				EffectKind::Turn {
					angle: 90.0,
					clockwise: true,
				},
				two_seconds,
			)
			.with_repeat()
			.with_go_back(),
		),
	]
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let frame_time = Duration::from_secs(1) / cli.fps.max(1);

	let mut sprites = Vec::new();
	for (index, (name, options)) in showcase().into_iter().enumerate() {
		let mut sprite = Sprite::new();
		sprite.register_clip(DEFAULT_CLIP, single_frame(), Duration::from_millis(1), 1)?;
		sprite.transform.center_coordinates = true;
		sprite
			.transform
			.set_position(80.0 * ((index % 3) as f64 + 1.0), 60.0 * ((index / 3) as f64 + 1.0));
		sprite.start()?;
		sprite.add_effect(options)?;
		sprites.push((name, sprite));
	}

	let started = Instant::now();
	let mut last_report = started;

	while started.elapsed() < Duration::from_secs(cli.seconds) {
		let now = Instant::now();
		let report = now.duration_since(last_report) >= Duration::from_millis(250);

		for (name, sprite) in &mut sprites {
			let Some(frame) = sprite.tick(now)? else {
				continue;
			};
			if !report {
				continue;
			}
			if cli.json {
				println!("{{\"effect\":\"{name}\",\"frame\":{}}}", serde_json::to_string(&frame)?);
			} else {
				let t = frame.transform;
				info!(
					"{name:<12} zoom ({:+.2}, {:+.2}) alpha {:.2} angle {:+.1}",
					t.zoom_x, t.zoom_y, t.alpha, t.angle
				);
			}
		}

		if report {
			last_report = now;
		}
		std::thread::sleep(frame_time);
	}

	Ok(())
}
