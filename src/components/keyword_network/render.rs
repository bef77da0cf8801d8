use super::state::NetworkState;
use crate::components::canvas::{DrawCommand, Font, Rgb, TextAlign, empty_state};
use crate::components::palette::{BACKGROUND, EDGE, LABEL, node_color};

pub const EMPTY_MESSAGE: &str = "no keywords available";

const EDGE_ALPHA: f64 = 0.6;
const MAX_EDGE_WIDTH: f64 = 6.0;
const MIN_EDGE_WIDTH: f64 = 0.5;

pub fn render(state: &NetworkState) -> Vec<DrawCommand> {
	if state.graph.is_empty() {
		return empty_state(state.width, state.height, BACKGROUND, EMPTY_MESSAGE);
	}
	let mut cmds = vec![
		DrawCommand::Clear {
			width: state.width,
			height: state.height,
			fill: BACKGROUND,
		},
		DrawCommand::PushView {
			translate: (state.transform.x, state.transform.y),
			scale: state.transform.k,
		},
	];
	draw_edges(state, &mut cmds);
	draw_nodes(state, &mut cmds);
	draw_labels(state, &mut cmds);
	cmds.push(DrawCommand::PopView);
	cmds
}

/// Stroke width proportional to weight, relative to the heaviest edge.
pub fn edge_width(weight: f64, max_weight: f64) -> f64 {
	if max_weight <= 0.0 {
		return MIN_EDGE_WIDTH;
	}
	(weight / max_weight * MAX_EDGE_WIDTH).clamp(MIN_EDGE_WIDTH, MAX_EDGE_WIDTH)
}

fn draw_edges(state: &NetworkState, cmds: &mut Vec<DrawCommand>) {
	let graph = &state.graph;
	let max_weight = graph.max_weight();
	let has_highlight = state.has_active_highlight();

	for edge in &graph.edges {
		let (Some(s), Some(t)) = (graph.index_of(&edge.source_id), graph.index_of(&edge.target_id))
		else {
			continue;
		};
		let (a, b) = (&graph.nodes[s], &graph.nodes[t]);
		let highlighted = state.is_hovered(s) || state.is_hovered(t);
		let alpha = match (has_highlight, highlighted) {
			(false, _) => EDGE_ALPHA,
			(true, true) => 0.9,
			(true, false) => 0.15,
		};
		cmds.push(DrawCommand::Line {
			from: (a.x, a.y),
			to: (b.x, b.y),
			stroke: EDGE,
			width: edge_width(edge.weight, max_weight) / state.transform.k,
			alpha,
		});
	}
}

fn draw_nodes(state: &NetworkState, cmds: &mut Vec<DrawCommand>) {
	let has_highlight = state.has_active_highlight();
	let k = state.transform.k;
	for (idx, node) in state.graph.nodes.iter().enumerate() {
		let alpha = if has_highlight && !state.is_highlighted(idx) {
			0.3
		} else {
			1.0
		};
		let outline = state
			.is_hovered(idx)
			.then_some((Rgb(0xff, 0xff, 0xff), 2.0 / k));
		cmds.push(DrawCommand::Circle {
			center: (node.x, node.y),
			radius: state.radius_of(idx),
			fill: node_color(node.sentiment),
			alpha,
			outline,
		});
	}
}

/// Word and count overlays; they take no part in the force layout.
fn draw_labels(state: &NetworkState, cmds: &mut Vec<DrawCommand>) {
	let has_highlight = state.has_active_highlight();
	let font_size = 12.0 / state.transform.k.max(0.5);
	for (idx, node) in state.graph.nodes.iter().enumerate() {
		let alpha = if has_highlight && !state.is_highlighted(idx) {
			0.4
		} else {
			1.0
		};
		let radius = state.radius_of(idx);
		cmds.push(DrawCommand::Text {
			text: node.id.clone(),
			at: (node.x, node.y),
			font: Font::new(font_size, "sans-serif").bold(true),
			fill: LABEL,
			alpha,
			rotation_degrees: 0.0,
			align: TextAlign::Center,
		});
		cmds.push(DrawCommand::Text {
			text: node.frequency.to_string(),
			at: (node.x + radius + 3.0, node.y - radius),
			font: Font::new(font_size * 0.85, "sans-serif"),
			fill: LABEL,
			alpha: alpha * 0.8,
			rotation_degrees: 0.0,
			align: TextAlign::Left,
		});
	}
}
