//! Run-once demo: an explosion plays a single pass and reports back.
//!
//! ```text
//! cargo run --example run_once
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use flipbook_rs::prelude::*;
use image::{Rgba, RgbaImage};
use log::info;

#[derive(Parser)]
#[command(name = "run_once")]
#[command(author = "flipbook-rs project")]
#[command(version)]
#[command(about = "Play an explosion clip exactly once", long_about = None)]
struct Cli {
	/// Total clip duration in milliseconds
	#[arg(long, default_value_t = 500)]
	duration_ms: u64,

	/// Render callbacks per second
	#[arg(long, default_value_t = 60)]
	fps: u32,
}

struct Strip(RgbaImage);

impl ImageSource for Strip {
	fn dimensions(&self) -> (u32, u32) {
		self.0.dimensions()
	}
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let frame_time = Duration::from_secs(1) / cli.fps.max(1);

	let mut explosion = Sprite::new();
	explosion.register_clip(
		DEFAULT_CLIP,
		Strip(RgbaImage::from_pixel(9 * 48, 48, Rgba([255, 160, 30, 255]))),
		Duration::from_millis(cli.duration_ms),
		9,
	)?;
	explosion.transform.set_position(100.0, 50.0);

	let done = Rc::new(Cell::new(false));
	let flag = Rc::clone(&done);
	explosion.run_once(move |sprite| {
		info!("explosion finished at ({:.0}, {:.0})", sprite.transform.x, sprite.transform.y);
		flag.set(true);
	})?;

	while !done.get() {
		if let Some(frame) = explosion.tick(Instant::now())? {
			info!("boom frame {} src {}", frame.frame_index, frame.source_rect);
		}
		std::thread::sleep(frame_time);
	}

	info!("sprite visible: {}", explosion.transform.visible);
	Ok(())
}
