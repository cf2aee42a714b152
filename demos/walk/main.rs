//! Headless walking-sprite demo.
//!
//! A sprite wanders a virtual screen, switching walk clips whenever its
//! heading flips, while the stand-in renderer prints the draw call it would
//! issue. Run with:
//!
//! ```text
//! cargo run --example walk -- --seconds 5 --fps 30
//! ```

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use flipbook_rs::prelude::*;
use image::{Rgba, RgbaImage};
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SCREEN_WIDTH: f64 = 320.0;
const SCREEN_HEIGHT: f64 = 240.0;

#[derive(Parser)]
#[command(name = "walk")]
#[command(author = "flipbook-rs project")]
#[command(version)]
#[command(about = "Simulate a wandering sprite without a window", long_about = None)]
struct Cli {
	/// How long to run the simulation
	#[arg(long, default_value_t = 3)]
	seconds: u64,

	/// Render callbacks per second
	#[arg(long, default_value_t = 30)]
	fps: u32,

	/// Movement speed in pixels per rendered frame
	#[arg(long, default_value_t = 2.0)]
	speed: f64,
}

/// An in-memory RGBA strip standing in for a decoded sprite sheet.
struct Strip(RgbaImage);

impl ImageSource for Strip {
	fn dimensions(&self) -> (u32, u32) {
		self.0.dimensions()
	}
}

fn strip(frames: u32, frame_width: u32, height: u32, tint: [u8; 4]) -> Strip {
	Strip(RgbaImage::from_pixel(frames * frame_width, height, Rgba(tint)))
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let frame_time = Duration::from_secs(1) / cli.fps.max(1);

	let mut girl = Sprite::new();
	girl.register_clip("walk-right", strip(6, 16, 24, [200, 120, 80, 255]), Duration::from_millis(700), 6)?;
	girl.register_clip("walk-left", strip(6, 16, 24, [80, 120, 200, 255]), Duration::from_millis(700), 6)?;
	girl.transform.set_position(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
	girl.speed = cli.speed;
	girl.direction = 0.0;
	girl.select_clip("walk-right")?;
	girl.start()?;

	let mut rng = SmallRng::from_os_rng();
	let started = Instant::now();

	while started.elapsed() < Duration::from_secs(cli.seconds) {
		// occasionally turn around, like a player tapping the arrow keys
		if rng.random_ratio(1, 30) {
			girl.direction = if rng.random_bool(0.5) { 0.0 } else { 180.0 };
			let clip = if girl.direction == 0.0 { "walk-right" } else { "walk-left" };
			girl.select_clip(clip)?;
			girl.start()?;
			info!("heading {}", clip);
		}

		wrap_around(&mut girl)?;

		if let Some(frame) = girl.tick(Instant::now())? {
			let (x, y) = frame.origin();
			info!(
				"draw {} frame {} src {} at ({x:.1}, {y:.1})",
				girl.current_clip(),
				frame.frame_index,
				frame.source_rect,
			);
		}

		std::thread::sleep(frame_time);
	}

	Ok(())
}

/// Re-enter the screen on the opposite edge, like the original demo.
fn wrap_around(sprite: &mut Sprite<Strip>) -> Result<()> {
	let width = f64::from(sprite.frame_width()?);
	if sprite.transform.x > SCREEN_WIDTH {
		sprite.transform.x = -width;
	}
	if sprite.transform.x + width < 0.0 {
		sprite.transform.x = SCREEN_WIDTH;
	}
	Ok(())
}
