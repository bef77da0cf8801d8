use std::collections::HashSet;

use super::types::KeywordGraph;

pub const MIN_NODE_RADIUS: f64 = 10.0;
pub const MAX_NODE_RADIUS: f64 = 30.0;

/// Circle radius for a node, growing with its share of the top frequency.
pub fn node_radius(frequency: u32, max_frequency: u32) -> f64 {
	if max_frequency == 0 {
		return MIN_NODE_RADIUS;
	}
	let ratio = frequency as f64 / max_frequency as f64;
	(MIN_NODE_RADIUS + ratio * (MAX_NODE_RADIUS - MIN_NODE_RADIUS))
		.clamp(MIN_NODE_RADIUS, MAX_NODE_RADIUS)
}

#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
}

/// Laid-out graph plus view and pointer state for one network canvas.
#[derive(Clone, Debug, Default)]
pub struct NetworkState {
	pub graph: KeywordGraph,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	max_frequency: u32,
}

impl NetworkState {
	/// Wrap an already positioned graph.
	pub fn new(graph: KeywordGraph, width: f64, height: f64) -> Self {
		let max_frequency = graph.max_frequency();
		Self {
			graph,
			transform: ViewTransform::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			max_frequency,
		}
	}

	pub fn radius_of(&self, idx: usize) -> f64 {
		node_radius(self.graph.nodes[idx].frequency, self.max_frequency)
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node whose circle contains the screen point.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		(0..self.graph.nodes.len()).rev().find(|&idx| {
			let node = &self.graph.nodes[idx];
			let (dx, dy) = (node.x - gx, node.y - gy);
			(dx * dx + dy * dy).sqrt() <= self.radius_of(idx)
		})
	}

	/// Returns whether the hover target changed.
	pub fn set_hover(&mut self, node: Option<usize>) -> bool {
		if self.hover.node == node {
			return false;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();
		if let Some(idx) = node {
			let id = self.graph.nodes[idx].id.as_str();
			for edge in &self.graph.edges {
				if let Some(other) = edge.other_end(id) {
					if let Some(j) = self.graph.index_of(other) {
						self.hover.neighbors.insert(j);
					}
				}
			}
		}
		true
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some()
	}

	pub fn start_pan(&mut self, x: f64, y: f64) {
		self.pan = PanState {
			active: true,
			moved: false,
			start_x: x,
			start_y: y,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	/// Returns whether the view moved.
	pub fn move_pan(&mut self, x: f64, y: f64) -> bool {
		if !self.pan.active {
			return false;
		}
		let (dx, dy) = (x - self.pan.start_x, y - self.pan.start_y);
		if dx.abs() + dy.abs() > 2.0 {
			self.pan.moved = true;
		}
		self.transform.x = self.pan.transform_start_x + dx;
		self.transform.y = self.pan.transform_start_y + dy;
		true
	}

	/// Ends a pan; returns true when the gesture was a click rather than a drag.
	pub fn end_pan(&mut self) -> bool {
		let was_click = self.pan.active && !self.pan.moved;
		self.pan = PanState::default();
		was_click
	}

	/// Zoom around the screen point, scroll down zooms out.
	pub fn zoom_at(&mut self, x: f64, y: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(0.25, 4.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}
}
