//! Benchmark suite for sprite ticking
//!
//! This benchmark measures the per-frame cost of the engine entry point —
//! movement integration, effect-stack evaluation and frame stepping — at
//! several effect-stack depths.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use std::hint::black_box;
use std::time::{Duration, Instant};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use flipbook_benches::{depths, sprite_with_effects};

/// Benchmark one tick across effect-stack depths
fn bench_tick_by_stack_depth(c: &mut Criterion) {
	let mut group = c.benchmark_group("sprite_tick");

	for depth in [depths::SINGLE, depths::SMALL, depths::MEDIUM, depths::LARGE] {
		group.throughput(Throughput::Elements(depth as u64));
		group.bench_with_input(BenchmarkId::new("effects", depth), &depth, |b, &depth| {
			let mut sprite = sprite_with_effects(depth);
			let t0 = Instant::now();
			let mut elapsed = Duration::ZERO;

			b.iter(|| {
				// advance wall clock a frame per iteration so effects keep
				// cycling instead of settling
				elapsed += Duration::from_millis(16);
				let result = sprite.tick(black_box(t0 + elapsed));
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark frame stepping with an empty effect stack
fn bench_bare_stepper(c: &mut Criterion) {
	let mut group = c.benchmark_group("frame_stepper");

	group.bench_function("tick_no_effects", |b| {
		let mut sprite = sprite_with_effects(0);
		let t0 = Instant::now();
		let mut elapsed = Duration::ZERO;

		b.iter(|| {
			elapsed += Duration::from_millis(16);
			let result = sprite.tick(black_box(t0 + elapsed));
			black_box(result)
		});
	});

	group.finish();
}

criterion_group!(benches, bench_tick_by_stack_depth, bench_bare_stepper);
criterion_main!(benches);
