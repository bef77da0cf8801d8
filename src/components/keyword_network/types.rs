use crate::api::Sentiment;

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkNode {
	pub id: String,
	pub frequency: u32,
	pub sentiment: Sentiment,
	pub x: f64,
	pub y: f64,
}

/// Undirected weighted link between two nodes, referenced by id.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkEdge {
	pub source_id: String,
	pub target_id: String,
	pub weight: f64,
}

impl NetworkEdge {
	pub fn other_end(&self, id: &str) -> Option<&str> {
		if self.source_id == id {
			Some(self.target_id.as_str())
		} else if self.target_id == id {
			Some(self.source_id.as_str())
		} else {
			None
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeywordGraph {
	pub nodes: Vec<NetworkNode>,
	pub edges: Vec<NetworkEdge>,
}

impl KeywordGraph {
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}

	pub fn max_frequency(&self) -> u32 {
		self.nodes.iter().map(|n| n.frequency).max().unwrap_or(0)
	}

	pub fn max_weight(&self) -> f64 {
		self.edges.iter().map(|e| e.weight).fold(0.0, f64::max)
	}
}

/// Counts shown next to the network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphSummary {
	pub nodes: usize,
	pub edges: usize,
	pub clusters: usize,
}
