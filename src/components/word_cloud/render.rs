use super::state::WordCloudState;
use crate::components::canvas::{DrawCommand, Font, TextAlign, TextMeasure, empty_state};
use crate::components::palette::{BACKGROUND, LABEL, TOOLTIP};

pub const EMPTY_MESSAGE: &str = "no keywords available";

const TOOLTIP_FONT_SIZE: f64 = 12.0;
const TOOLTIP_PAD: f64 = 6.0;

pub fn render<M: TextMeasure + ?Sized>(
	state: &WordCloudState,
	font_family: &str,
	metrics: &M,
) -> Vec<DrawCommand> {
	if state.words.is_empty() {
		return empty_state(state.width, state.height, BACKGROUND, EMPTY_MESSAGE);
	}

	let mut cmds = Vec::with_capacity(state.words.len() + 3);
	cmds.push(DrawCommand::Clear {
		width: state.width,
		height: state.height,
		fill: BACKGROUND,
	});
	for (idx, word) in state.words.iter().enumerate() {
		let emphasis = state.emphasis(idx);
		cmds.push(DrawCommand::Text {
			text: word.word().to_string(),
			at: (word.x, word.y),
			font: Font::new(word.font_size, font_family).bold(emphasis.bold),
			fill: word.color,
			alpha: emphasis.alpha,
			rotation_degrees: word.rotation_degrees,
			align: TextAlign::Center,
		});
	}

	if let Some((text, x, top)) = state.tooltip() {
		let font = Font::new(TOOLTIP_FONT_SIZE, font_family);
		let w = metrics.text_width(&text, &font) + 2.0 * TOOLTIP_PAD;
		let h = TOOLTIP_FONT_SIZE + 2.0 * TOOLTIP_PAD;
		// keep the box on the canvas
		let left = (x - w / 2.0).clamp(0.0, (state.width - w).max(0.0));
		let box_top = (top - h - 4.0).max(0.0);
		cmds.push(DrawCommand::Rect {
			x: left,
			y: box_top,
			width: w,
			height: h,
			fill: TOOLTIP,
			alpha: 0.9,
		});
		cmds.push(DrawCommand::Text {
			text,
			at: (left + w / 2.0, box_top + h / 2.0),
			font,
			fill: LABEL,
			alpha: 1.0,
			rotation_degrees: 0.0,
			align: TextAlign::Center,
		});
	}
	cmds
}
