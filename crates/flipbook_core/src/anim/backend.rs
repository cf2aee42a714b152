//! Rendering backend boundary.
//!
//! The engine never loads, decodes or draws pixels. It consumes an opaque,
//! already-decoded image handle from the backend (only its pixel dimensions
//! are inspected) and hands back, per tick, the source sub-rectangle and
//! transform state the backend needs to issue one draw call.

use serde::{Deserialize, Serialize};

use super::transform::Transform;

/// A decoded image strip supplied by the rendering backend.
///
/// The engine treats the handle as opaque; it only ever asks for the pixel
/// dimensions, once, at clip registration. Any image type of the host
/// renderer can participate by implementing this trait.
///
/// # Examples
///
/// ```
/// use flipbook_core::anim::ImageSource;
///
/// struct Strip {
/// 	width: u32,
/// 	height: u32,
/// }
///
/// impl ImageSource for Strip {
/// 	fn dimensions(&self) -> (u32, u32) {
/// 		(self.width, self.height)
/// 	}
/// }
/// ```
pub trait ImageSource {
	/// Returns the image's `(width, height)` in pixels.
	fn dimensions(&self) -> (u32, u32);
}

/// Source sub-rectangle within a clip's image strip.
///
/// Frames are cut left to right from a single horizontal strip, so `y` is
/// always 0 and `x` advances by the frame width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRect {
	/// Left edge in pixels
	pub x: u32,

	/// Top edge in pixels
	pub y: u32,

	/// Width in pixels
	pub width: u32,

	/// Height in pixels
	pub height: u32,
}

impl std::fmt::Display for SourceRect {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}×{}+{}+{}", self.width, self.height, self.x, self.y)
	}
}

/// Everything the rendering backend needs for one draw call.
///
/// Returned by [`Sprite::tick`](super::sprite::Sprite::tick): the displayed
/// frame index, the frame's source rectangle within the strip, and a copy of
/// the sprite's transform state to feed into the backend's own affine/color
/// pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
	/// Index of the frame to display, in `[0, frame_count)`
	pub frame_index: u32,

	/// Sub-rectangle of the clip's image strip holding that frame
	pub source_rect: SourceRect,

	/// Transform state at this instant
	pub transform: Transform,
}

impl FrameOutput {
	/// Resolves the transform's center-coordinates flag into a top-left draw
	/// origin.
	///
	/// When the sprite addresses its geometric center, the origin is shifted
	/// by half the zoomed frame extent; otherwise the position is returned
	/// unchanged. Mirrored axes (negative zoom) shift by the same magnitude.
	pub fn origin(&self) -> (f64, f64) {
		if self.transform.center_coordinates {
			let half_w = f64::from(self.source_rect.width) * self.transform.zoom_x.abs() / 2.0;
			let half_h = f64::from(self.source_rect.height) * self.transform.zoom_y.abs() / 2.0;
			(self.transform.x - half_w, self.transform.y - half_h)
		} else {
			(self.transform.x, self.transform.y)
		}
	}
}
