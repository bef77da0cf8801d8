//! Sentiment color tables.

use super::canvas::Rgb;
use crate::api::Sentiment;

pub const BACKGROUND: Rgb = Rgb(0x1a, 0x1a, 0x2e);
pub const LABEL: Rgb = Rgb(0xff, 0xff, 0xff);
pub const EDGE: Rgb = Rgb(0x64, 0xb4, 0xff);
pub const TOOLTIP: Rgb = Rgb(0x0f, 0x0f, 0x1c);

/// Continuous gradient from a low-frequency to a high-frequency color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScale {
	pub low: Rgb,
	pub high: Rgb,
}

impl ColorScale {
	pub fn at(&self, t: f64) -> Rgb {
		self.low.lerp(self.high, t)
	}
}

/// Word cloud gradient, independent per partition.
pub fn word_scale(sentiment: Sentiment) -> ColorScale {
	match sentiment {
		Sentiment::Positive => ColorScale {
			low: Rgb(0xa7, 0xf3, 0xd0),
			high: Rgb(0x04, 0x78, 0x57),
		},
		Sentiment::Negative => ColorScale {
			low: Rgb(0xfe, 0xca, 0xca),
			high: Rgb(0xb9, 0x1c, 0x1c),
		},
		Sentiment::Neutral => ColorScale {
			low: Rgb(0xd1, 0xd5, 0xdb),
			high: Rgb(0x4b, 0x55, 0x63),
		},
	}
}

/// Fixed fill for keyword network nodes.
pub fn node_color(sentiment: Sentiment) -> Rgb {
	match sentiment {
		Sentiment::Positive => Rgb(0x10, 0xb9, 0x81),
		Sentiment::Negative => Rgb(0xef, 0x44, 0x44),
		Sentiment::Neutral => Rgb(0x6b, 0x72, 0x80),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scales_hit_their_endpoints() {
		for sentiment in Sentiment::ALL {
			let scale = word_scale(sentiment);
			assert_eq!(scale.at(0.0), scale.low);
			assert_eq!(scale.at(1.0), scale.high);
		}
		assert_ne!(word_scale(Sentiment::Positive), word_scale(Sentiment::Negative));
	}
}
