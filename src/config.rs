//! Dashboard tuning knobs, provided to the component tree through context.

use serde::Deserialize;

/// Word cloud sizing and placement parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WordCloudConfig {
	pub max_words: usize,
	pub min_font_size: f64,
	pub max_font_size: f64,
	pub font_size_range: f64,
	pub max_rotation_degrees: f64,
	/// Gap kept around every word's bounding box.
	pub padding: f64,
	/// Radial growth per radian of the placement spiral.
	pub spiral_step: f64,
	pub spiral_angle_step: f64,
	/// Search bound; `None` uses half the canvas diagonal.
	pub max_spiral_radius: Option<f64>,
	pub font_family: String,
}

impl Default for WordCloudConfig {
	fn default() -> Self {
		Self {
			max_words: 50,
			min_font_size: 8.0,
			max_font_size: 32.0,
			font_size_range: 24.0,
			max_rotation_degrees: 30.0,
			padding: 2.0,
			spiral_step: 2.0,
			spiral_angle_step: 0.1,
			max_spiral_radius: None,
			font_family: "sans-serif".into(),
		}
	}
}

/// Keyword graph construction parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
	pub top_k: usize,
	pub same_sentiment_bonus: f64,
	pub min_edge_weight: f64,
	pub min_cluster_size: usize,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			top_k: 8,
			same_sentiment_bonus: 1.5,
			min_edge_weight: 1.0,
			min_cluster_size: 3,
		}
	}
}

/// Force simulation constants.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForceParams {
	pub iterations: usize,
	pub repulsion: f64,
	pub attraction: f64,
	pub initial_radius: f64,
	pub margin: f64,
	pub max_displacement: f64,
}

impl Default for ForceParams {
	fn default() -> Self {
		Self {
			iterations: 100,
			repulsion: 5000.0,
			attraction: 0.001,
			initial_radius: 150.0,
			margin: 50.0,
			max_displacement: 10.0,
		}
	}
}

/// Top-level dashboard configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
	/// Review API origin; empty means the page's own origin.
	pub api_base: String,
	pub refresh_interval_secs: u64,
	pub fetch_limit: usize,
	pub word_cloud: WordCloudConfig,
	pub graph: GraphConfig,
	pub force: ForceParams,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			api_base: option_env!("REVIEW_API_BASE").unwrap_or_default().to_string(),
			refresh_interval_secs: 30,
			fetch_limit: 100,
			word_cloud: WordCloudConfig::default(),
			graph: GraphConfig::default(),
			force: ForceParams::default(),
		}
	}
}

impl DashboardConfig {
	/// Parse a JSON override document; missing fields keep their defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Absolute API base, falling back to the window origin.
	pub fn resolved_api_base(&self) -> String {
		if !self.api_base.is_empty() {
			return self.api_base.clone();
		}
		web_sys::window()
			.and_then(|w| w.location().origin().ok())
			.unwrap_or_default()
	}
}
