//! Drawing instructions shared by the canvas components.
//!
//! Layout and styling produce a `Vec<DrawCommand>`; [`apply`] replays them on
//! a 2D context without keeping any state of its own.

use std::f64::consts::PI;
use std::fmt;

use unicode_width::UnicodeWidthStr;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

/// Opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	/// Linear blend, `t` clamped to `[0, 1]`.
	pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
		let t = t.clamp(0.0, 1.0);
		let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
		Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
	}
}

impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
	Left,
	Center,
}

impl TextAlign {
	fn as_str(self) -> &'static str {
		match self {
			TextAlign::Left => "left",
			TextAlign::Center => "center",
		}
	}
}

/// Canvas font shorthand pieces.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
	pub size: f64,
	pub bold: bool,
	pub family: String,
}

impl Font {
	pub fn new(size: f64, family: &str) -> Self {
		Self {
			size,
			bold: false,
			family: family.to_string(),
		}
	}

	pub fn bold(mut self, bold: bool) -> Self {
		self.bold = bold;
		self
	}

	pub fn css(&self) -> String {
		let weight = if self.bold { "bold" } else { "normal" };
		format!("{} {}px {}", weight, self.size, self.family)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	Clear {
		width: f64,
		height: f64,
		fill: Rgb,
	},
	Line {
		from: (f64, f64),
		to: (f64, f64),
		stroke: Rgb,
		width: f64,
		alpha: f64,
	},
	Circle {
		center: (f64, f64),
		radius: f64,
		fill: Rgb,
		alpha: f64,
		outline: Option<(Rgb, f64)>,
	},
	Rect {
		x: f64,
		y: f64,
		width: f64,
		height: f64,
		fill: Rgb,
		alpha: f64,
	},
	Text {
		text: String,
		at: (f64, f64),
		font: Font,
		fill: Rgb,
		alpha: f64,
		rotation_degrees: f64,
		align: TextAlign,
	},
	/// View transform applied to every following command until `PopView`.
	PushView {
		translate: (f64, f64),
		scale: f64,
	},
	PopView,
}

/// Replay `commands` onto `ctx`.
pub fn apply(commands: &[DrawCommand], ctx: &CanvasRenderingContext2d) {
	for cmd in commands {
		match cmd {
			DrawCommand::Clear {
				width,
				height,
				fill,
			} => {
				ctx.set_global_alpha(1.0);
				ctx.set_fill_style_str(&fill.to_string());
				ctx.fill_rect(0.0, 0.0, *width, *height);
			}
			DrawCommand::Line {
				from,
				to,
				stroke,
				width,
				alpha,
			} => {
				ctx.set_global_alpha(*alpha);
				ctx.set_stroke_style_str(&stroke.to_string());
				ctx.set_line_width(*width);
				ctx.begin_path();
				ctx.move_to(from.0, from.1);
				ctx.line_to(to.0, to.1);
				ctx.stroke();
			}
			DrawCommand::Circle {
				center,
				radius,
				fill,
				alpha,
				outline,
			} => {
				ctx.set_global_alpha(*alpha);
				ctx.begin_path();
				let _ = ctx.arc(center.0, center.1, *radius, 0.0, 2.0 * PI);
				ctx.set_fill_style_str(&fill.to_string());
				ctx.fill();
				if let Some((stroke, width)) = outline {
					ctx.set_stroke_style_str(&stroke.to_string());
					ctx.set_line_width(*width);
					ctx.stroke();
				}
			}
			DrawCommand::Rect {
				x,
				y,
				width,
				height,
				fill,
				alpha,
			} => {
				ctx.set_global_alpha(*alpha);
				ctx.set_fill_style_str(&fill.to_string());
				ctx.fill_rect(*x, *y, *width, *height);
			}
			DrawCommand::Text {
				text,
				at,
				font,
				fill,
				alpha,
				rotation_degrees,
				align,
			} => {
				ctx.save();
				ctx.set_global_alpha(*alpha);
				let _ = ctx.translate(at.0, at.1);
				let _ = ctx.rotate(rotation_degrees.to_radians());
				ctx.set_font(&font.css());
				ctx.set_text_align(align.as_str());
				ctx.set_text_baseline("middle");
				ctx.set_fill_style_str(&fill.to_string());
				let _ = ctx.fill_text(text, 0.0, 0.0);
				ctx.restore();
			}
			DrawCommand::PushView { translate, scale } => {
				ctx.save();
				let _ = ctx.translate(translate.0, translate.1);
				let _ = ctx.scale(*scale, *scale);
			}
			DrawCommand::PopView => ctx.restore(),
		}
	}
	ctx.set_global_alpha(1.0);
}

/// Centered placeholder shown instead of an empty canvas.
pub fn empty_state(width: f64, height: f64, background: Rgb, message: &str) -> Vec<DrawCommand> {
	vec![
		DrawCommand::Clear {
			width,
			height,
			fill: background,
		},
		DrawCommand::Text {
			text: message.to_string(),
			at: (width / 2.0, height / 2.0),
			font: Font::new(14.0, "sans-serif"),
			fill: Rgb(0x9a, 0xa0, 0xa6),
			alpha: 1.0,
			rotation_degrees: 0.0,
			align: TextAlign::Center,
		},
	]
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

/// Mouse position relative to the canvas' top-left corner.
pub fn event_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Size the backing store from explicit dimensions, falling back to the
/// parent element and finally to `default`.
pub fn fit_canvas(
	canvas: &HtmlCanvasElement,
	width: Option<f64>,
	height: Option<f64>,
	default: (f64, f64),
) -> (f64, f64) {
	let parent = canvas.parent_element();
	let from_parent = |f: fn(&web_sys::Element) -> i32, fallback: f64| {
		parent
			.as_ref()
			.map(|p| f(p) as f64)
			.filter(|v| *v > 0.0)
			.unwrap_or(fallback)
	};
	let w = width.unwrap_or_else(|| from_parent(web_sys::Element::client_width, default.0));
	let h = height.unwrap_or_else(|| from_parent(web_sys::Element::client_height, default.1));
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	(w, h)
}

pub fn set_cursor(canvas: &HtmlCanvasElement, cursor: &str) {
	let _ = canvas.style().set_property("cursor", cursor);
}

/// Seed for layout randomness in the browser.
pub fn time_seed() -> u64 {
	js_sys::Date::now() as u64
}

/// Width of a single line of text at a given font.
pub trait TextMeasure {
	fn text_width(&self, text: &str, font: &Font) -> f64;
}

/// Display-width estimate for when no surface is available. Wide (CJK)
/// glyphs count as two cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct EstimatedMetrics;

impl TextMeasure for EstimatedMetrics {
	fn text_width(&self, text: &str, font: &Font) -> f64 {
		let weight = if font.bold { 0.62 } else { 0.56 };
		UnicodeWidthStr::width(text) as f64 * font.size * weight
	}
}

impl TextMeasure for CanvasRenderingContext2d {
	fn text_width(&self, text: &str, font: &Font) -> f64 {
		self.set_font(&font.css());
		match self.measure_text(text) {
			Ok(m) => m.width(),
			Err(_) => EstimatedMetrics.text_width(text, font),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rgb_formats_as_hex_and_blends() {
		let black = Rgb(0, 0, 0);
		let white = Rgb(255, 255, 255);
		assert_eq!(white.to_string(), "#ffffff");
		assert_eq!(black.lerp(white, 0.5), Rgb(128, 128, 128));
		assert_eq!(black.lerp(white, 2.0), white);
	}

	#[test]
	fn estimated_width_counts_wide_glyphs_double() {
		let font = Font::new(10.0, "sans-serif");
		let narrow = EstimatedMetrics.text_width("ab", &font);
		let wide = EstimatedMetrics.text_width("통화", &font);
		assert!((wide - 2.0 * narrow).abs() < 1e-9);
		assert_eq!(font.clone().bold(true).css(), "bold 10px sans-serif");
	}

	#[test]
	fn empty_state_is_centered_message() {
		let cmds = empty_state(400.0, 300.0, Rgb(0, 0, 0), "no keywords available");
		assert_eq!(cmds.len(), 2);
		match &cmds[1] {
			DrawCommand::Text { text, at, .. } => {
				assert_eq!(text, "no keywords available");
				assert_eq!(*at, (200.0, 150.0));
			}
			other => panic!("unexpected command {other:?}"),
		}
	}
}
