//! Fixed-iteration force-directed placement.
//!
//! Nodes start evenly spaced on a circle around the canvas center. Each
//! iteration accumulates inverse-square repulsion between every pair and
//! weight-scaled spring attraction along every edge, caps the resulting
//! step, then clamps nodes back inside the margin box. There is no
//! convergence check: the iteration count alone bounds the work.
//!
//! Edge weights are raw review frequencies, so the attraction constant is
//! divided by the heaviest edge of the graph. The node spacing then depends
//! on `repulsion / attraction` only, whatever the frequency scale.

use std::f64::consts::PI;

use super::types::{NetworkEdge, NetworkNode};
use crate::config::ForceParams;

/// Distances below this are treated as coincident nodes.
const EPSILON: f64 = 0.01;

/// Axis range `[margin, extent - margin]`, collapsed to the midpoint when the
/// canvas is narrower than both margins.
fn axis_bounds(extent: f64, margin: f64) -> (f64, f64) {
	let lo = margin.max(0.0);
	let hi = extent - margin.max(0.0);
	if lo <= hi {
		(lo, hi)
	} else {
		(extent / 2.0, extent / 2.0)
	}
}

/// Positions `nodes` in place. `edges` are only read; edges naming unknown
/// ids are ignored.
pub fn layout_graph(
	nodes: &mut [NetworkNode],
	edges: &[NetworkEdge],
	width: f64,
	height: f64,
	params: &ForceParams,
) {
	let n = nodes.len();
	if n == 0 {
		return;
	}
	let (cx, cy) = (width / 2.0, height / 2.0);
	if n == 1 {
		nodes[0].x = cx;
		nodes[0].y = cy;
		return;
	}

	let (x_lo, x_hi) = axis_bounds(width, params.margin);
	let (y_lo, y_hi) = axis_bounds(height, params.margin);
	let radius = params
		.initial_radius
		.min((x_hi - x_lo) / 2.0)
		.min((y_hi - y_lo) / 2.0)
		.max(0.0);
	for (i, node) in nodes.iter_mut().enumerate() {
		let angle = 2.0 * PI * i as f64 / n as f64;
		node.x = cx + radius * angle.cos();
		node.y = cy + radius * angle.sin();
	}

	let links: Vec<(usize, usize, f64)> = edges
		.iter()
		.filter_map(|e| {
			let s = nodes.iter().position(|n| n.id == e.source_id)?;
			let t = nodes.iter().position(|n| n.id == e.target_id)?;
			(s != t).then_some((s, t, e.weight))
		})
		.collect();
	let heaviest = links.iter().map(|&(_, _, w)| w).fold(0.0, f64::max);
	let attraction = if heaviest > 0.0 {
		params.attraction / heaviest
	} else {
		params.attraction
	};

	let mut disp = vec![(0.0_f64, 0.0_f64); n];
	for _ in 0..params.iterations {
		disp.iter_mut().for_each(|d| *d = (0.0, 0.0));
		accumulate_repulsion(nodes, params.repulsion, &mut disp);
		accumulate_attraction(nodes, &links, attraction, &mut disp);

		for (node, (dx, dy)) in nodes.iter_mut().zip(&disp) {
			let len = (dx * dx + dy * dy).sqrt();
			let scale = if len > params.max_displacement && len > 0.0 {
				params.max_displacement / len
			} else {
				1.0
			};
			node.x = (node.x + dx * scale).clamp(x_lo, x_hi);
			node.y = (node.y + dy * scale).clamp(y_lo, y_hi);
		}
	}
}

fn accumulate_repulsion(nodes: &[NetworkNode], repulsion: f64, disp: &mut [(f64, f64)]) {
	let n = nodes.len();
	for i in 0..n {
		for j in (i + 1)..n {
			let (dx, dy) = (nodes[i].x - nodes[j].x, nodes[i].y - nodes[j].y);
			let dist = (dx * dx + dy * dy).sqrt();
			let (ux, uy, push) = if dist < EPSILON {
				// Coincident: separate by a fixed nudge along a per-pair direction.
				let angle = 2.0 * PI * (i + j) as f64 / (2 * n) as f64;
				(angle.cos(), angle.sin(), EPSILON)
			} else {
				(dx / dist, dy / dist, repulsion / (dist * dist))
			};
			disp[i].0 += ux * push;
			disp[i].1 += uy * push;
			disp[j].0 -= ux * push;
			disp[j].1 -= uy * push;
		}
	}
}

fn accumulate_attraction(
	nodes: &[NetworkNode],
	links: &[(usize, usize, f64)],
	attraction: f64,
	disp: &mut [(f64, f64)],
) {
	for &(s, t, weight) in links {
		let (dx, dy) = (nodes[t].x - nodes[s].x, nodes[t].y - nodes[s].y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < EPSILON {
			continue;
		}
		let pull = dist * attraction * weight;
		let (ux, uy) = (dx / dist, dy / dist);
		disp[s].0 += ux * pull;
		disp[s].1 += uy * pull;
		disp[t].0 -= ux * pull;
		disp[t].1 -= uy * pull;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::{Sentiment, WordDatum};
	use crate::components::keyword_network::graph::build_graph;
	use crate::components::keyword_network::state::MIN_NODE_RADIUS;
	use crate::config::GraphConfig;

	fn node(id: &str, frequency: u32) -> NetworkNode {
		NetworkNode {
			id: id.into(),
			frequency,
			sentiment: Sentiment::Positive,
			x: 0.0,
			y: 0.0,
		}
	}

	fn sample_graph(n: u32) -> (Vec<NetworkNode>, Vec<NetworkEdge>) {
		let words: Vec<WordDatum> = (1..=n)
			.map(|i| {
				let sentiment = if i % 3 == 0 {
					Sentiment::Negative
				} else {
					Sentiment::Positive
				};
				WordDatum::new(format!("k{i}"), i * 5, sentiment)
			})
			.collect();
		let graph = build_graph(
			&[words],
			&GraphConfig {
				top_k: n as usize,
				..GraphConfig::default()
			},
		);
		(graph.nodes, graph.edges)
	}

	fn assert_inside(nodes: &[NetworkNode], width: f64, height: f64, margin: f64) {
		for n in nodes {
			assert!(n.x.is_finite() && n.y.is_finite(), "{} is not finite", n.id);
			assert!(n.x >= margin && n.x <= width - margin, "{} x={}", n.id, n.x);
			assert!(n.y >= margin && n.y <= height - margin, "{} y={}", n.id, n.y);
		}
	}

	#[test]
	fn nodes_stay_inside_margin_box() {
		let params = ForceParams::default();
		for n in [2, 3, 8, 20] {
			let (mut nodes, edges) = sample_graph(n);
			layout_graph(&mut nodes, &edges, 600.0, 400.0, &params);
			assert_inside(&nodes, 600.0, 400.0, params.margin);
		}
	}

	#[test]
	fn strong_repulsion_is_still_clamped() {
		let params = ForceParams {
			repulsion: 1e9,
			max_displacement: 1e6,
			..ForceParams::default()
		};
		let (mut nodes, edges) = sample_graph(8);
		layout_graph(&mut nodes, &edges, 300.0, 200.0, &params);
		assert_inside(&nodes, 300.0, 200.0, params.margin);
	}

	fn min_pair_distance(nodes: &[NetworkNode]) -> f64 {
		let mut min = f64::INFINITY;
		for (i, a) in nodes.iter().enumerate() {
			for b in &nodes[i + 1..] {
				min = min.min(((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt());
			}
		}
		min
	}

	#[test]
	fn nodes_keep_apart_at_any_frequency_scale() {
		let base = [20, 16, 12, 8, 2];
		for scale in [1, 10, 50] {
			let words = |sentiment: Sentiment| -> Vec<WordDatum> {
				base.iter()
					.enumerate()
					.map(|(i, f)| WordDatum::new(format!("{sentiment:?}{i}"), f * scale, sentiment))
					.collect()
			};
			let mut graph = build_graph(
				&[words(Sentiment::Positive), words(Sentiment::Negative)],
				&GraphConfig::default(),
			);
			assert_eq!(graph.nodes.len(), 8);
			layout_graph(
				&mut graph.nodes,
				&graph.edges,
				600.0,
				400.0,
				&ForceParams::default(),
			);
			let min = min_pair_distance(&graph.nodes);
			assert!(
				min >= 2.0 * MIN_NODE_RADIUS,
				"scale {scale}: closest pair only {min:.2} apart"
			);
		}
	}

	#[test]
	fn spacing_does_not_depend_on_weight_scale() {
		let (nodes, edges) = sample_graph(6);
		let heavy: Vec<NetworkEdge> = edges
			.iter()
			.map(|e| NetworkEdge {
				weight: e.weight * 128.0,
				..e.clone()
			})
			.collect();
		let params = ForceParams::default();
		let (mut light_nodes, mut heavy_nodes) = (nodes.clone(), nodes);
		layout_graph(&mut light_nodes, &edges, 600.0, 400.0, &params);
		layout_graph(&mut heavy_nodes, &heavy, 600.0, 400.0, &params);
		assert_eq!(light_nodes, heavy_nodes);
	}

	#[test]
	fn single_node_sits_at_center() {
		let mut nodes = vec![node("only", 3)];
		layout_graph(&mut nodes, &[], 600.0, 400.0, &ForceParams::default());
		assert_eq!((nodes[0].x, nodes[0].y), (300.0, 200.0));
	}

	#[test]
	fn empty_graph_is_a_no_op() {
		let mut nodes: Vec<NetworkNode> = Vec::new();
		layout_graph(&mut nodes, &[], 600.0, 400.0, &ForceParams::default());
		assert!(nodes.is_empty());
	}

	#[test]
	fn edges_are_not_modified() {
		let (mut nodes, edges) = sample_graph(6);
		let before = edges.clone();
		layout_graph(&mut nodes, &edges, 600.0, 400.0, &ForceParams::default());
		assert_eq!(edges, before);
	}

	#[test]
	fn layout_is_deterministic() {
		let (mut a, edges) = sample_graph(8);
		let mut b = a.clone();
		let params = ForceParams::default();
		layout_graph(&mut a, &edges, 600.0, 400.0, &params);
		layout_graph(&mut b, &edges, 600.0, 400.0, &params);
		assert_eq!(a, b);
	}

	#[test]
	fn repelling_pair_without_edges_moves_apart() {
		let mut nodes = vec![node("a", 1), node("b", 1)];
		let params = ForceParams {
			iterations: 50,
			initial_radius: 10.0,
			..ForceParams::default()
		};
		layout_graph(&mut nodes, &[], 600.0, 400.0, &params);
		let d = ((nodes[0].x - nodes[1].x).powi(2) + (nodes[0].y - nodes[1].y).powi(2)).sqrt();
		assert!(d > 20.0, "distance {d}");
	}

	#[test]
	fn coincident_nodes_are_separated_without_blowing_up() {
		let mut nodes = vec![node("a", 1), node("b", 1), node("c", 1)];
		let mut disp = vec![(0.0, 0.0); 3];
		accumulate_repulsion(&nodes, 5000.0, &mut disp);
		for (dx, dy) in &disp {
			assert!(dx.is_finite() && dy.is_finite());
			assert!(dx.abs() <= 2.0 * EPSILON + 1e-12 && dy.abs() <= 2.0 * EPSILON + 1e-12);
		}
		assert!(disp.iter().any(|(dx, dy)| *dx != 0.0 || *dy != 0.0));

		// A canvas too small for the margin collapses onto the center lines.
		layout_graph(&mut nodes, &[], 60.0, 40.0, &ForceParams::default());
		for n in &nodes {
			assert_eq!((n.x, n.y), (30.0, 20.0));
		}
	}

	#[test]
	fn unknown_edge_endpoints_are_ignored() {
		let mut nodes = vec![node("a", 1), node("b", 1)];
		let edges = vec![NetworkEdge {
			source_id: "a".into(),
			target_id: "ghost".into(),
			weight: 100.0,
		}];
		layout_graph(&mut nodes, &edges, 600.0, 400.0, &ForceParams::default());
		assert_inside(&nodes, 600.0, 400.0, 50.0);
	}
}
