use crate::api::WordDatum;
use crate::components::canvas::Rgb;

/// Axis-aligned box in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub left: f64,
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
}

impl Bounds {
	pub fn around(cx: f64, cy: f64, half_w: f64, half_h: f64) -> Self {
		Self {
			left: cx - half_w,
			top: cy - half_h,
			right: cx + half_w,
			bottom: cy + half_h,
		}
	}

	pub fn inflate(&self, by: f64) -> Self {
		Self {
			left: self.left - by,
			top: self.top - by,
			right: self.right + by,
			bottom: self.bottom + by,
		}
	}

	/// Touching edges do not count as overlap.
	pub fn intersects(&self, other: &Bounds) -> bool {
		self.left < other.right
			&& other.left < self.right
			&& self.top < other.bottom
			&& other.top < self.bottom
	}

	pub fn contains(&self, x: f64, y: f64) -> bool {
		x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
	}

	pub fn inside(&self, width: f64, height: f64) -> bool {
		self.left >= 0.0 && self.top >= 0.0 && self.right <= width && self.bottom <= height
	}
}

/// A word with its computed position and styling for one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedWord {
	pub datum: WordDatum,
	pub font_size: f64,
	pub rotation_degrees: f64,
	pub x: f64,
	pub y: f64,
	pub color: Rgb,
	pub bounds: Bounds,
}

impl PlacedWord {
	pub fn word(&self) -> &str {
		&self.datum.word
	}
}
