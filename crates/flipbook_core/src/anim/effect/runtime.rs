//! Runtime effect instances.
//!
//! An [`Effect`] is pure data: its kind and parameters, the baseline values
//! snapshotted from the sprite's transform at creation time, and a lazily
//! anchored time window. The effect never reaches back into the sprite or
//! re-arms itself; re-arming a repeating effect is the
//! [stack's](super::stack::EffectStack) job, through [`Effect::regenerate`].

use std::time::{Duration, Instant};

use crate::anim::range::map_range;
use crate::anim::transform::Transform;

use super::kind::{Axis, EffectKind};

/// A linear sweep from one attribute value to another.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Span {
	from: f64,
	to: f64,
}

impl Span {
	fn new(from: f64, to: f64) -> Self {
		Self {
			from,
			to,
		}
	}

	/// Value at progress `g` in [0, 1]. Exact at both endpoints.
	fn at(&self, g: f64) -> f64 {
		map_range(g, (0.0, 1.0), (self.from, self.to))
	}
}

/// The attribute sweeps an effect performs, baked from its kind and the
/// creation-time transform snapshot.
///
/// Holding resolved spans instead of the raw kind keeps evaluation a single
/// match with no impossible kind/baseline pairings, and makes
/// [`Effect::regenerate`] drift-free: every cycle replays the same spans.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Curve {
	Zoom {
		x: Option<Span>,
		y: Option<Span>,
	},
	Alpha(Span),
	Angle(Span),
	Color {
		red: Option<Span>,
		green: Option<Span>,
		blue: Option<Span>,
	},
	Position {
		x: Span,
		y: Span,
	},
}

impl Curve {
	fn from_kind(kind: &EffectKind, baseline: &Transform) -> Self {
		match kind {
			EffectKind::Scale {
				target,
			} => Self::Zoom {
				x: Some(Span::new(baseline.zoom_x, *target)),
				y: Some(Span::new(baseline.zoom_y, *target)),
			},
			EffectKind::Flip {
				axis,
			} => match axis {
				Axis::X => Self::Zoom {
					x: Some(Span::new(baseline.zoom_x, -baseline.zoom_x)),
					y: None,
				},
				Axis::Y => Self::Zoom {
					x: None,
					y: Some(Span::new(baseline.zoom_y, -baseline.zoom_y)),
				},
			},
			EffectKind::Fade {
				from,
				to,
			} => Self::Alpha(Span::new(*from, *to)),
			EffectKind::Turn {
				angle,
				clockwise,
			} => {
				let delta = if *clockwise { -angle } else { *angle };
				Self::Angle(Span::new(baseline.angle, baseline.angle + delta))
			}
			EffectKind::Hue {
				red,
				green,
				blue,
			} => Self::Color {
				red: red.map(|target| Span::new(baseline.red, target)),
				green: green.map(|target| Span::new(baseline.green, target)),
				blue: blue.map(|target| Span::new(baseline.blue, target)),
			},
			EffectKind::Move {
				x,
				y,
			} => Self::Position {
				x: Span::new(baseline.x, x.unwrap_or(baseline.x)),
				y: Span::new(baseline.y, y.unwrap_or(baseline.y)),
			},
		}
	}

	/// Writes the attribute values for progress `g` into the transform.
	fn apply(&self, g: f64, transform: &mut Transform) {
		match self {
			Self::Zoom {
				x,
				y,
			} => {
				if let Some(span) = x {
					transform.zoom_x = span.at(g);
				}
				if let Some(span) = y {
					transform.zoom_y = span.at(g);
				}
			}
			Self::Alpha(span) => transform.alpha = span.at(g),
			Self::Angle(span) => transform.angle = span.at(g),
			Self::Color {
				red,
				green,
				blue,
			} => {
				if let Some(span) = red {
					transform.red = span.at(g);
				}
				if let Some(span) = green {
					transform.green = span.at(g);
				}
				if let Some(span) = blue {
					transform.blue = span.at(g);
				}
			}
			Self::Position {
				x,
				y,
			} => {
				transform.x = x.at(g);
				transform.y = y.at(g);
			}
		}
	}
}

/// Outcome of one effect evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Evaluation {
	/// The effect wrote an in-progress value
	Applied,
	/// This evaluation completed a cycle
	CycleComplete,
	/// The effect finished on an earlier tick and wrote nothing
	Inert,
}

/// One timed transformation bound to a clip's effect stack.
///
/// The time window anchors lazily: `start` is the instant of the first
/// evaluation, not of construction, so stacking effects created together but
/// drawn from different instants keeps each anchored to its own first draw.
///
/// Completion is edge-exact: the evaluation that first observes
/// `now >= start + duration` snaps the animated attributes to the cycle
/// endpoint (one-way: the target; go-back or repeating: the baseline) instead
/// of leaving whatever the previous in-progress write produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effect {
	kind: EffectKind,
	duration: Duration,
	go_back: bool,
	repeat: bool,
	curve: Curve,
	started_at: Option<Instant>,
	finished: bool,
}

impl Effect {
	/// Snapshots `baseline` and builds a runtime instance.
	pub(crate) fn new(
		kind: EffectKind,
		duration: Duration,
		go_back: bool,
		repeat: bool,
		baseline: &Transform,
	) -> Self {
		Self {
			curve: Curve::from_kind(&kind, baseline),
			kind,
			duration,
			go_back,
			repeat,
			started_at: None,
			finished: false,
		}
	}

	/// Returns the effect's kind and parameters.
	#[inline]
	pub fn kind(&self) -> &EffectKind {
		&self.kind
	}

	/// Returns the duration of one cycle.
	#[inline]
	pub fn duration(&self) -> Duration {
		self.duration
	}

	/// Returns `true` if the effect re-arms itself at the end of each cycle.
	#[inline]
	pub fn repeats(&self) -> bool {
		self.repeat
	}

	/// Returns `true` if the effect plays forward then reverses within its
	/// duration.
	#[inline]
	pub fn goes_back(&self) -> bool {
		self.go_back
	}

	/// Returns `true` once a non-repeating effect has completed its cycle.
	#[inline]
	pub fn is_finished(&self) -> bool {
		self.finished
	}

	/// Returns a re-armed copy of this effect.
	///
	/// The copy keeps the kind, parameters and creation-time baseline, with
	/// an unanchored time window: its next evaluation restarts the cycle
	/// from the pre-effect baseline, so repeated cycles never drift.
	pub fn regenerate(&self) -> Self {
		Self {
			started_at: None,
			finished: false,
			..*self
		}
	}

	/// Evaluates the effect at `now`, writing into `transform`.
	pub(crate) fn evaluate(&mut self, transform: &mut Transform, now: Instant) -> Evaluation {
		if self.finished {
			return Evaluation::Inert;
		}

		let start = *self.started_at.get_or_insert(now);
		if now >= start + self.duration {
			// Snap to the exact cycle endpoint. A one-way effect that is
			// about to be re-armed lands on its restart value instead.
			let f = if self.repeat && !self.go_back {
				0.0
			} else {
				1.0
			};
			self.curve.apply(self.folded(f), transform);
			if !self.repeat {
				self.finished = true;
			}
			return Evaluation::CycleComplete;
		}

		let f = now.duration_since(start).as_secs_f64() / self.duration.as_secs_f64();
		self.curve.apply(self.folded(f), transform);
		Evaluation::Applied
	}

	/// Folds the elapsed fraction for go-back playback: out on the first
	/// half, back on the second.
	fn folded(&self, f: f64) -> f64 {
		if self.go_back {
			if f <= 0.5 {
				f * 2.0
			} else {
				(1.0 - f) * 2.0
			}
		} else {
			f
		}
	}
}

impl std::fmt::Display for Effect {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Effect({}, {:?}{}{})",
			self.kind,
			self.duration,
			if self.go_back { ", go-back" } else { "" },
			if self.repeat { ", repeat" } else { "" },
		)
	}
}
