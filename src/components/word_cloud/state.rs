use super::types::PlacedWord;

/// Per-word visual emphasis derived from hover/selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emphasis {
	pub alpha: f64,
	pub bold: bool,
}

/// Placed words plus transient interaction state for one cloud instance.
///
/// Hover and selection never touch `words`; they only change how the
/// renderer styles them.
#[derive(Clone, Debug, Default)]
pub struct WordCloudState {
	pub words: Vec<PlacedWord>,
	pub width: f64,
	pub height: f64,
	pub hovered: Option<usize>,
	selected: Option<String>,
}

impl WordCloudState {
	pub fn new(words: Vec<PlacedWord>, width: f64, height: f64) -> Self {
		Self {
			words,
			width,
			height,
			hovered: None,
			selected: None,
		}
	}

	/// Swap in a fresh layout. A data refresh clears the selection; a resize
	/// keeps it while the word is still on the canvas.
	pub fn replace(&mut self, words: Vec<PlacedWord>, width: f64, height: f64, keep_selection: bool) {
		let selected = if keep_selection {
			self.selected
				.take()
				.filter(|s| words.iter().any(|w| w.word() == s))
		} else {
			None
		};
		*self = Self::new(words, width, height);
		self.selected = selected;
	}

	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// Topmost word under the point.
	pub fn word_at(&self, x: f64, y: f64) -> Option<usize> {
		self.words.iter().rposition(|w| w.bounds.contains(x, y))
	}

	/// Returns whether anything changed.
	pub fn set_hover(&mut self, idx: Option<usize>) -> bool {
		if self.hovered == idx {
			return false;
		}
		self.hovered = idx;
		true
	}

	/// Handle a click at the point and report whether the selection changed.
	/// Clicking the selected word again, or empty space, deselects.
	pub fn click(&mut self, x: f64, y: f64) -> bool {
		let next = self
			.word_at(x, y)
			.map(|idx| self.words[idx].word().to_string())
			.filter(|word| self.selected.as_ref() != Some(word));
		self.set_selected(next)
	}

	/// Follow a selection made elsewhere on the page. A word this cloud does
	/// not show clears the local highlight. Returns whether anything changed.
	pub fn sync_selection(&mut self, external: Option<&str>) -> bool {
		let next = external
			.filter(|word| self.words.iter().any(|w| w.word() == *word))
			.map(str::to_string);
		self.set_selected(next)
	}

	fn set_selected(&mut self, next: Option<String>) -> bool {
		if self.selected == next {
			return false;
		}
		self.selected = next;
		true
	}

	pub fn emphasis(&self, idx: usize) -> Emphasis {
		let word = self.words[idx].word();
		match (&self.selected, self.hovered) {
			(Some(sel), _) if sel == word => Emphasis {
				alpha: 1.0,
				bold: true,
			},
			(Some(_), hovered) => Emphasis {
				alpha: if hovered == Some(idx) { 0.5 } else { 0.2 },
				bold: false,
			},
			(None, Some(h)) if h == idx => Emphasis {
				alpha: 1.0,
				bold: true,
			},
			(None, Some(_)) => Emphasis {
				alpha: 0.75,
				bold: false,
			},
			(None, None) => Emphasis {
				alpha: 0.9,
				bold: false,
			},
		}
	}

	/// Tooltip text and anchor for the hovered word.
	pub fn tooltip(&self) -> Option<(String, f64, f64)> {
		let w = self.words.get(self.hovered?)?;
		Some((
			format!("{} · {}", w.word(), w.datum.frequency),
			w.x,
			w.bounds.top,
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::{Sentiment, WordDatum};
	use crate::components::canvas::Rgb;
	use crate::components::word_cloud::types::Bounds;

	fn placed(word: &str, x: f64, y: f64) -> PlacedWord {
		PlacedWord {
			datum: WordDatum::new(word, 4, Sentiment::Positive),
			font_size: 12.0,
			rotation_degrees: 0.0,
			x,
			y,
			color: Rgb(0, 0, 0),
			bounds: Bounds::around(x, y, 20.0, 8.0),
		}
	}

	fn state() -> WordCloudState {
		WordCloudState::new(
			vec![placed("fast", 100.0, 100.0), placed("slow", 200.0, 100.0)],
			400.0,
			300.0,
		)
	}

	#[test]
	fn hover_does_not_touch_placements() {
		let mut s = state();
		let before = s.words.clone();
		let idx = s.word_at(105.0, 102.0);
		assert_eq!(idx, Some(0));
		assert!(s.set_hover(idx));
		assert!(!s.set_hover(idx));
		assert_eq!(s.words, before);
		assert_eq!(s.tooltip().unwrap().0, "fast · 4");
		assert!(s.emphasis(0).bold);
		assert!(s.emphasis(1).alpha < s.emphasis(0).alpha);
	}

	#[test]
	fn click_selects_exclusively_and_toggles() {
		let mut s = state();
		assert!(s.click(200.0, 100.0));
		assert_eq!(s.selected(), Some("slow"));
		assert_eq!(s.emphasis(1).alpha, 1.0);
		assert!(s.emphasis(0).alpha < 0.5);

		// Clicking the selected word again is a deselect, and is reported.
		assert!(s.click(200.0, 100.0));
		assert_eq!(s.selected(), None);

		assert!(s.click(100.0, 100.0));
		assert_eq!(s.selected(), Some("fast"));
		assert!(s.click(390.0, 290.0));
		assert_eq!(s.selected(), None);

		// Empty space with nothing selected changes nothing.
		assert!(!s.click(390.0, 290.0));
	}

	#[test]
	fn selection_made_elsewhere_replaces_local_highlight() {
		let mut s = state();
		s.click(100.0, 100.0);

		assert!(s.sync_selection(Some("slow")));
		assert_eq!(s.selected(), Some("slow"));
		assert!(!s.sync_selection(Some("slow")));

		// A word from another cloud clears this one.
		assert!(s.sync_selection(Some("crash")));
		assert_eq!(s.selected(), None);
		assert_eq!(s.emphasis(0).alpha, s.emphasis(1).alpha);

		s.click(100.0, 100.0);
		assert!(s.sync_selection(None));
		assert_eq!(s.selected(), None);
	}

	#[test]
	fn refresh_clears_selection_but_resize_keeps_it() {
		let mut s = state();
		s.click(100.0, 100.0);
		s.replace(vec![placed("fast", 50.0, 50.0)], 200.0, 150.0, true);
		assert_eq!(s.selected(), Some("fast"));
		s.replace(vec![placed("slow", 50.0, 50.0)], 200.0, 150.0, true);
		assert_eq!(s.selected(), None);

		s.click(50.0, 50.0);
		s.replace(vec![placed("slow", 50.0, 50.0)], 200.0, 150.0, false);
		assert_eq!(s.selected(), None);
	}
}
