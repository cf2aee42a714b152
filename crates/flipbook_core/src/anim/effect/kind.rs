//! Effect kind vocabulary.
//!
//! Each effect kind is a tagged variant carrying only the parameters that
//! kind needs. Unrequested fields do not exist, so no sentinel values are
//! overloaded as "unset": a hue channel or move axis that should stay
//! untouched is simply `None`.

use serde::{Deserialize, Serialize};

/// Axis selector for the flip effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
	/// Horizontal axis
	X,
	/// Vertical axis
	Y,
}

impl std::fmt::Display for Axis {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::X => write!(f, "X"),
			Self::Y => write!(f, "Y"),
		}
	}
}

/// One kind of timed transformation, with its parameters.
///
/// Every kind interpolates linearly over the effect's duration, one-way or
/// there-and-back (go-back). The value each kind starts from is snapshotted
/// from the sprite's transform when the effect is created.
///
/// # Examples
///
/// ```
/// use flipbook_core::anim::{Axis, EffectKind};
///
/// // inflate to double size
/// let inflate = EffectKind::Scale { target: 2.0 };
///
/// // mirror horizontally
/// let flip = EffectKind::Flip { axis: Axis::X };
///
/// // dim the red channel only
/// let dusk = EffectKind::Hue {
/// 	red: Some(0.4),
/// 	green: None,
/// 	blue: None,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EffectKind {
	/// Zoom both axes from their current factor to `target`
	Scale {
		/// Zoom factor to reach at the end of the cycle
		target: f64,
	},

	/// Squash one axis through zero to its mirrored factor.
	///
	/// One-way runs `z → 0 → -z` over two equal halves; go-back runs
	/// `z → 0 → -z → 0 → z` over four equal quarters. A sign-flipping
	/// squash, not a 3-D rotation.
	Flip {
		/// The axis whose zoom factor is flipped
		axis: Axis,
	},

	/// Interpolate alpha between two explicit opacities
	Fade {
		/// Alpha at the start of the cycle
		from: f64,
		/// Alpha at the end of the cycle (one-way) or midpoint (go-back)
		to: f64,
	},

	/// Rotate by `angle` degrees relative to the starting angle
	Turn {
		/// Magnitude of the turn in degrees
		angle: f64,
		/// Turn clockwise instead of counter-clockwise
		clockwise: bool,
	},

	/// Shift color channel multipliers toward per-channel targets.
	///
	/// `None` leaves a channel untouched.
	Hue {
		/// Target red multiplier
		red: Option<f64>,
		/// Target green multiplier
		green: Option<f64>,
		/// Target blue multiplier
		blue: Option<f64>,
	},

	/// Glide toward absolute coordinates.
	///
	/// A `None` axis is pinned to the sprite's coordinate at effect
	/// creation time.
	Move {
		/// Target x coordinate
		x: Option<f64>,
		/// Target y coordinate
		y: Option<f64>,
	},
}

impl std::fmt::Display for EffectKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Scale {
				target,
			} => write!(f, "Scale(→{})", target),
			Self::Flip {
				axis,
			} => write!(f, "Flip({})", axis),
			Self::Fade {
				from,
				to,
			} => write!(f, "Fade({}→{})", from, to),
			Self::Turn {
				angle,
				clockwise,
			} => write!(f, "Turn({}°{})", angle, if *clockwise { " cw" } else { "" }),
			Self::Hue {
				..
			} => write!(f, "Hue"),
			Self::Move {
				x,
				y,
			} => write!(f, "Move({:?}, {:?})", x, y),
		}
	}
}
