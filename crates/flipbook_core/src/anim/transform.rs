//! Sprite transform state.
//!
//! This module defines the mutable attribute bag that effects write into and
//! the rendering backend reads from. It is pure data: movement integration
//! and effect evaluation live in [`sprite`](super::sprite) and
//! [`effect`](super::effect).

use serde::{Deserialize, Serialize};

/// Aggregate visual attributes of a sprite, consumed by rendering.
///
/// A fresh transform carries no tint (all color multipliers at 1), full
/// opacity, no scale (zoom 1 on both axes) and is visible at the origin.
///
/// # Examples
///
/// ```
/// use flipbook_core::anim::Transform;
///
/// let mut t = Transform::new();
/// assert_eq!((t.zoom_x, t.zoom_y), (1.0, 1.0));
/// assert_eq!(t.alpha, 1.0);
/// assert!(t.visible);
///
/// t.set_position(160.0, 120.0);
/// t.set_uniform_zoom(2.0);
/// t.rotate_to(45.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
	/// X coordinate in pixels
	pub x: f64,

	/// Y coordinate in pixels
	pub y: f64,

	/// Zoom factor on the X axis (1 = no scale, negative = mirrored)
	pub zoom_x: f64,

	/// Zoom factor on the Y axis (1 = no scale, negative = mirrored)
	pub zoom_y: f64,

	/// Rotation angle in degrees
	pub angle: f64,

	/// Skew on the X axis in degrees
	pub skew_x: f64,

	/// Skew on the Y axis in degrees
	pub skew_y: f64,

	/// Red channel multiplier (1 = untinted)
	pub red: f64,

	/// Green channel multiplier (1 = untinted)
	pub green: f64,

	/// Blue channel multiplier (1 = untinted)
	pub blue: f64,

	/// Opacity, 0 (transparent) to 1 (opaque)
	pub alpha: f64,

	/// Visibility of the sprite
	pub visible: bool,

	/// When set, `x`/`y` address the frame's geometric center instead of its
	/// top-left corner
	pub center_coordinates: bool,
}

impl Transform {
	/// Creates a transform with neutral defaults.
	pub fn new() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			zoom_x: 1.0,
			zoom_y: 1.0,
			angle: 0.0,
			skew_x: 0.0,
			skew_y: 0.0,
			red: 1.0,
			green: 1.0,
			blue: 1.0,
			alpha: 1.0,
			visible: true,
			center_coordinates: false,
		}
	}

	/// Sets both coordinates at once.
	#[inline]
	pub fn set_position(&mut self, x: f64, y: f64) {
		self.x = x;
		self.y = y;
	}

	/// Returns the current coordinates.
	#[inline]
	pub fn position(&self) -> (f64, f64) {
		(self.x, self.y)
	}

	/// Sets the zoom factor per axis.
	#[inline]
	pub fn set_zoom(&mut self, zoom_x: f64, zoom_y: f64) {
		self.zoom_x = zoom_x;
		self.zoom_y = zoom_y;
	}

	/// Sets the same zoom factor on both axes.
	#[inline]
	pub fn set_uniform_zoom(&mut self, zoom: f64) {
		self.set_zoom(zoom, zoom);
	}

	/// Returns the zoom factors.
	#[inline]
	pub fn zoom(&self) -> (f64, f64) {
		(self.zoom_x, self.zoom_y)
	}

	/// Sets the rotation angle in degrees.
	#[inline]
	pub fn rotate_to(&mut self, angle: f64) {
		self.angle = angle;
	}

	/// Sets the skew per axis, in degrees.
	#[inline]
	pub fn set_skew(&mut self, skew_x: f64, skew_y: f64) {
		self.skew_x = skew_x;
		self.skew_y = skew_y;
	}

	/// Makes the sprite visible.
	#[inline]
	pub fn show(&mut self) {
		self.visible = true;
	}

	/// Hides the sprite.
	#[inline]
	pub fn hide(&mut self) {
		self.visible = false;
	}

	/// Toggles visibility.
	#[inline]
	pub fn toggle_visibility(&mut self) {
		self.visible = !self.visible;
	}
}

impl Default for Transform {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_neutral_defaults() {
		let t = Transform::new();
		assert_eq!(t.red, 1.0);
		assert_eq!(t.green, 1.0);
		assert_eq!(t.blue, 1.0);
		assert_eq!(t.alpha, 1.0);
		assert_eq!(t.zoom_x, 1.0);
		assert_eq!(t.zoom_y, 1.0);
		assert!(t.visible);
		assert!(!t.center_coordinates);
	}

	#[test]
	fn test_setters() {
		let mut t = Transform::new();
		t.set_position(10.0, -4.0);
		assert_eq!(t.position(), (10.0, -4.0));

		t.set_uniform_zoom(1.5);
		assert_eq!(t.zoom(), (1.5, 1.5));

		t.set_skew(45.0, 23.0);
		assert_eq!((t.skew_x, t.skew_y), (45.0, 23.0));
	}

	#[test]
	fn test_visibility_toggle() {
		let mut t = Transform::new();
		t.toggle_visibility();
		assert!(!t.visible);
		t.toggle_visibility();
		assert!(t.visible);
	}
}
