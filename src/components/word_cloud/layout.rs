//! Spiral word placement.
//!
//! Words are ranked by frequency, sized against the largest selected
//! frequency and then dropped onto an Archimedean spiral growing out of the
//! canvas center. Each word takes the first spiral point where its rotated
//! bounding box stays on the canvas and clear of every word already placed.
//! Words that reach the end of the spiral without a free spot are left out.

use log::debug;
use rand::Rng;

use super::types::{Bounds, PlacedWord};
use crate::api::WordDatum;
use crate::components::canvas::{Font, TextMeasure};
use crate::components::palette::word_scale;
use crate::config::WordCloudConfig;

/// Line box height relative to the font size.
const LINE_HEIGHT: f64 = 1.1;

/// Valid words ranked by descending frequency, ties kept in input order,
/// truncated to `max_words`.
pub fn rank_words(words: &[WordDatum], max_words: usize) -> Vec<&WordDatum> {
	let mut ranked: Vec<&WordDatum> = words.iter().filter(|w| w.is_valid()).collect();
	ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
	ranked.truncate(max_words);
	ranked
}

pub fn font_size_for(frequency: u32, max_frequency: u32, config: &WordCloudConfig) -> f64 {
	let ratio = if max_frequency == 0 {
		0.0
	} else {
		frequency as f64 / max_frequency as f64
	};
	(config.min_font_size + ratio * config.font_size_range)
		.clamp(config.min_font_size, config.max_font_size)
}

/// Half extents of a `w`×`h` box rotated by `degrees`.
fn rotated_half_extents(w: f64, h: f64, degrees: f64) -> (f64, f64) {
	let (sin, cos) = degrees.to_radians().sin_cos();
	(
		(w * cos.abs() + h * sin.abs()) / 2.0,
		(w * sin.abs() + h * cos.abs()) / 2.0,
	)
}

pub fn layout_words<M, R>(
	words: &[WordDatum],
	width: f64,
	height: f64,
	config: &WordCloudConfig,
	metrics: &M,
	rng: &mut R,
) -> Vec<PlacedWord>
where
	M: TextMeasure + ?Sized,
	R: Rng + ?Sized,
{
	let selected = rank_words(words, config.max_words);
	let Some(max_frequency) = selected.iter().map(|w| w.frequency).max() else {
		return Vec::new();
	};
	if width <= 0.0 || height <= 0.0 {
		return Vec::new();
	}

	let (cx, cy) = (width / 2.0, height / 2.0);
	let max_radius = config
		.max_spiral_radius
		.unwrap_or_else(|| (width * width + height * height).sqrt() / 2.0);
	let angle_step = config.spiral_angle_step.max(0.01);
	let max_rotation = config.max_rotation_degrees.abs();

	let mut placed: Vec<PlacedWord> = Vec::with_capacity(selected.len());
	for datum in selected {
		let font_size = font_size_for(datum.frequency, max_frequency, config);
		let rotation_degrees = if max_rotation > 0.0 {
			rng.gen_range(-max_rotation..=max_rotation)
		} else {
			0.0
		};
		let font = Font::new(font_size, &config.font_family);
		let text_w = metrics.text_width(&datum.word, &font);
		let (half_w, half_h) =
			rotated_half_extents(text_w, font_size * LINE_HEIGHT, rotation_degrees);

		let mut theta = 0.0_f64;
		let mut spot = None;
		loop {
			let r = config.spiral_step * theta;
			if r > max_radius {
				break;
			}
			let (x, y) = (cx + r * theta.cos(), cy + r * theta.sin());
			let bounds = Bounds::around(x, y, half_w, half_h);
			let padded = bounds.inflate(config.padding);
			if bounds.inside(width, height) && !placed.iter().any(|p| padded.intersects(&p.bounds))
			{
				spot = Some((x, y, bounds));
				break;
			}
			theta += angle_step;
		}

		let Some((x, y, bounds)) = spot else {
			debug!("word cloud: no room for {:?}", datum.word);
			continue;
		};
		let ratio = datum.frequency as f64 / max_frequency as f64;
		placed.push(PlacedWord {
			datum: datum.clone(),
			font_size,
			rotation_degrees,
			x,
			y,
			color: word_scale(datum.sentiment).at(ratio),
			bounds,
		});
	}
	placed
}

#[cfg(test)]
mod tests {
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	use super::*;
	use crate::api::Sentiment;
	use crate::components::canvas::EstimatedMetrics;

	fn sample_words(rng: &mut StdRng, n: usize) -> Vec<WordDatum> {
		const STEMS: &[&str] = &["call", "voice", "battery", "update", "login", "menu", "통화", "속도"];
		(0..n)
			.map(|i| {
				let sentiment = if i % 2 == 0 {
					Sentiment::Positive
				} else {
					Sentiment::Negative
				};
				WordDatum::new(
					format!("{}{}", STEMS[i % STEMS.len()], i),
					rng.gen_range(1..=120),
					sentiment,
				)
			})
			.collect()
	}

	fn run(words: &[WordDatum], width: f64, height: f64, seed: u64) -> Vec<PlacedWord> {
		let mut rng = StdRng::seed_from_u64(seed);
		layout_words(
			words,
			width,
			height,
			&WordCloudConfig::default(),
			&EstimatedMetrics,
			&mut rng,
		)
	}

	#[test]
	fn result_is_bounded_by_max_words_and_font_range() {
		let config = WordCloudConfig::default();
		let mut rng = StdRng::seed_from_u64(7);
		let words = sample_words(&mut rng, 80);
		let placed = run(&words, 400.0, 300.0, 1);
		assert!(!placed.is_empty());
		assert!(placed.len() <= words.len().min(config.max_words));
		for p in &placed {
			assert!(p.font_size >= config.min_font_size && p.font_size <= config.max_font_size);
			assert!(p.rotation_degrees.abs() <= config.max_rotation_degrees);
		}
	}

	#[test]
	fn placed_words_never_overlap_and_stay_on_canvas() {
		for seed in 0..5 {
			let mut rng = StdRng::seed_from_u64(seed);
			let words = sample_words(&mut rng, 50);
			let placed = run(&words, 400.0, 300.0, seed);
			for (i, a) in placed.iter().enumerate() {
				assert!(a.bounds.inside(400.0, 300.0), "{} escaped the canvas", a.word());
				for b in &placed[i + 1..] {
					assert!(
						!a.bounds.intersects(&b.bounds),
						"{} overlaps {}",
						a.word(),
						b.word()
					);
				}
			}
		}
	}

	#[test]
	fn more_frequent_word_is_larger() {
		let words = vec![
			WordDatum::new("fast", 10, Sentiment::Positive),
			WordDatum::new("slow", 2, Sentiment::Negative),
		];
		let placed = run(&words, 400.0, 300.0, 3);
		assert_eq!(placed.len(), 2);
		let size = |w: &str| placed.iter().find(|p| p.word() == w).unwrap().font_size;
		assert!(size("fast") > size("slow"));
		assert_eq!(size("fast"), 32.0);
	}

	#[test]
	fn sizes_are_relative_to_selected_words_only() {
		let config = WordCloudConfig {
			max_words: 2,
			..WordCloudConfig::default()
		};
		let words = vec![
			WordDatum::new("a", 10, Sentiment::Positive),
			WordDatum::new("b", 5, Sentiment::Positive),
			WordDatum::new("c", 1, Sentiment::Positive),
		];
		let placed = layout_words(
			&words,
			400.0,
			300.0,
			&config,
			&EstimatedMetrics,
			&mut StdRng::seed_from_u64(0),
		);
		assert_eq!(placed.len(), 2);
		assert_eq!(placed[0].font_size, config.max_font_size);
		assert_eq!(placed[1].font_size, 8.0 + 0.5 * 24.0);
	}

	#[test]
	fn ranking_is_stable_and_skips_invalid_words() {
		let words = vec![
			WordDatum::new("first", 5, Sentiment::Neutral),
			WordDatum::new("", 50, Sentiment::Neutral),
			WordDatum::new("second", 5, Sentiment::Neutral),
			WordDatum::new("zero", 0, Sentiment::Neutral),
			WordDatum::new("top", 9, Sentiment::Neutral),
			WordDatum::new("third", 5, Sentiment::Neutral),
		];
		let ranked: Vec<&str> = rank_words(&words, 3).iter().map(|w| w.word.as_str()).collect();
		assert_eq!(ranked, vec!["top", "first", "second"]);
	}

	#[test]
	fn empty_input_gives_empty_layout() {
		assert!(run(&[], 400.0, 300.0, 0).is_empty());
		let invalid = vec![WordDatum::new("  ", 3, Sentiment::Positive)];
		assert!(run(&invalid, 400.0, 300.0, 0).is_empty());
		let words = vec![WordDatum::new("fast", 3, Sentiment::Positive)];
		assert!(run(&words, 0.0, 300.0, 0).is_empty());
	}

	#[test]
	fn words_that_cannot_fit_are_dropped() {
		let words = vec![
			WordDatum::new("extraordinarily", 10, Sentiment::Positive),
			WordDatum::new("ok", 1, Sentiment::Positive),
		];
		let placed = run(&words, 40.0, 30.0, 9);
		assert!(placed.iter().all(|p| p.word() != "extraordinarily"));
		assert!(placed.len() <= 1);
	}

	#[test]
	fn same_seed_same_layout() {
		let mut rng = StdRng::seed_from_u64(11);
		let words = sample_words(&mut rng, 30);
		assert_eq!(run(&words, 400.0, 300.0, 42), run(&words, 400.0, 300.0, 42));
	}

	#[test]
	fn color_follows_frequency_within_partition() {
		let words = vec![
			WordDatum::new("great", 10, Sentiment::Positive),
			WordDatum::new("crash", 10, Sentiment::Negative),
		];
		let placed = run(&words, 400.0, 300.0, 5);
		let color = |w: &str| placed.iter().find(|p| p.word() == w).unwrap().color;
		assert_eq!(color("great"), word_scale(Sentiment::Positive).high);
		assert_eq!(color("crash"), word_scale(Sentiment::Negative).high);
	}
}
