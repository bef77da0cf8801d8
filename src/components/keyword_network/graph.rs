//! Keyword graph construction.
//!
//! Edge weights are a frequency-based stand-in for co-occurrence: every pair
//! of selected keywords is linked with `min(freq_a, freq_b)`, boosted when
//! both share a sentiment. This approximates how strongly two keywords travel
//! together; it is not derived from joint mentions in review text.

use std::collections::{HashMap, HashSet};

use super::types::{GraphSummary, KeywordGraph, NetworkEdge, NetworkNode};
use crate::api::WordDatum;
use crate::config::GraphConfig;

/// Merge partitions, keep the `top_k` most frequent distinct words and link
/// every unordered pair whose weight reaches `min_edge_weight`.
pub fn build_graph(word_sets: &[Vec<WordDatum>], config: &GraphConfig) -> KeywordGraph {
	let mut ranked: Vec<&WordDatum> = word_sets
		.iter()
		.flatten()
		.filter(|w| w.is_valid())
		.collect();
	ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));

	// A word listed under several sentiments keeps its highest-ranked entry.
	let mut seen = HashSet::new();
	let nodes: Vec<NetworkNode> = ranked
		.into_iter()
		.filter(|w| seen.insert(w.word.trim()))
		.take(config.top_k)
		.map(|w| NetworkNode {
			id: w.word.trim().to_string(),
			frequency: w.frequency,
			sentiment: w.sentiment,
			x: 0.0,
			y: 0.0,
		})
		.collect();

	let mut edges = Vec::new();
	for (i, a) in nodes.iter().enumerate() {
		for b in &nodes[i + 1..] {
			let mut weight = a.frequency.min(b.frequency) as f64;
			if a.sentiment == b.sentiment {
				weight *= config.same_sentiment_bonus;
			}
			if weight >= config.min_edge_weight {
				edges.push(NetworkEdge {
					source_id: a.id.clone(),
					target_id: b.id.clone(),
					weight,
				});
			}
		}
	}

	KeywordGraph { nodes, edges }
}

/// Connected components with at least `min_size` members, in node order.
/// Each component lists node indices.
pub fn clusters(graph: &KeywordGraph, min_size: usize) -> Vec<Vec<usize>> {
	let index: HashMap<&str, usize> = graph
		.nodes
		.iter()
		.enumerate()
		.map(|(i, n)| (n.id.as_str(), i))
		.collect();
	let mut adjacency = vec![Vec::new(); graph.nodes.len()];
	for edge in &graph.edges {
		if let (Some(&s), Some(&t)) = (
			index.get(edge.source_id.as_str()),
			index.get(edge.target_id.as_str()),
		) {
			adjacency[s].push(t);
			adjacency[t].push(s);
		}
	}

	let mut visited = vec![false; graph.nodes.len()];
	let mut out = Vec::new();
	for start in 0..graph.nodes.len() {
		if visited[start] {
			continue;
		}
		visited[start] = true;
		let mut component = Vec::new();
		let mut stack = vec![start];
		while let Some(n) = stack.pop() {
			component.push(n);
			for &m in &adjacency[n] {
				if !visited[m] {
					visited[m] = true;
					stack.push(m);
				}
			}
		}
		if component.len() >= min_size.max(1) {
			component.sort_unstable();
			out.push(component);
		}
	}
	out
}

pub fn summarize(graph: &KeywordGraph, min_cluster_size: usize) -> GraphSummary {
	GraphSummary {
		nodes: graph.nodes.len(),
		edges: graph.edges.len(),
		clusters: clusters(graph, min_cluster_size).len(),
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::api::Sentiment;

	fn w(word: &str, frequency: u32, sentiment: Sentiment) -> WordDatum {
		WordDatum::new(word, frequency, sentiment)
	}

	#[test]
	fn same_sentiment_pair_gets_bonus() {
		let graph = build_graph(
			&[vec![
				w("fast", 10, Sentiment::Positive),
				w("easy", 4, Sentiment::Positive),
			]],
			&GraphConfig::default(),
		);
		assert_eq!(graph.edges.len(), 1);
		assert_eq!(graph.edges[0].weight, 6.0);
		assert_eq!(graph.edges[0].source_id, "fast");
		assert_eq!(graph.edges[0].target_id, "easy");
	}

	#[test]
	fn mixed_sentiment_pair_uses_plain_minimum() {
		let graph = build_graph(
			&[
				vec![w("fast", 10, Sentiment::Positive)],
				vec![w("crash", 7, Sentiment::Negative)],
			],
			&GraphConfig::default(),
		);
		assert_eq!(graph.edges[0].weight, 7.0);
	}

	#[test]
	fn no_self_loops_or_duplicate_pairs() {
		let positive: Vec<_> = (1..=12)
			.map(|i| w(&format!("p{i}"), i, Sentiment::Positive))
			.collect();
		let negative: Vec<_> = (1..=12)
			.map(|i| w(&format!("n{i}"), i * 2, Sentiment::Negative))
			.collect();
		let graph = build_graph(&[positive, negative], &GraphConfig::default());
		assert_eq!(graph.nodes.len(), 8);

		let mut pairs = HashSet::new();
		for e in &graph.edges {
			assert_ne!(e.source_id, e.target_id);
			assert!(e.weight >= 1.0);
			let key = if e.source_id < e.target_id {
				(e.source_id.clone(), e.target_id.clone())
			} else {
				(e.target_id.clone(), e.source_id.clone())
			};
			assert!(pairs.insert(key), "duplicate edge {e:?}");
		}
		assert_eq!(graph.edges.len(), 8 * 7 / 2);
	}

	#[test]
	fn duplicate_words_collapse_to_highest_entry() {
		let graph = build_graph(
			&[
				vec![w("update", 3, Sentiment::Positive)],
				vec![w("update", 9, Sentiment::Negative), w("login", 2, Sentiment::Negative)],
			],
			&GraphConfig::default(),
		);
		let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, vec!["update", "login"]);
		assert_eq!(graph.nodes[0].frequency, 9);
		assert_eq!(graph.nodes[0].sentiment, Sentiment::Negative);
	}

	#[test]
	fn min_edge_weight_prunes_weak_links() {
		let config = GraphConfig {
			min_edge_weight: 5.0,
			..GraphConfig::default()
		};
		let graph = build_graph(
			&[vec![
				w("a", 10, Sentiment::Neutral),
				w("b", 8, Sentiment::Neutral),
				w("c", 2, Sentiment::Neutral),
			]],
			&config,
		);
		assert_eq!(graph.edges.len(), 1);
		assert_eq!(summarize(&graph, 3).clusters, 0);
		assert_eq!(clusters(&graph, 2), vec![vec![0, 1]]);
	}

	#[test]
	fn empty_input_gives_empty_graph() {
		let graph = build_graph(&[], &GraphConfig::default());
		assert!(graph.is_empty());
		assert!(graph.edges.is_empty());
		let graph = build_graph(&[vec![], vec![w("", 4, Sentiment::Positive)]], &GraphConfig::default());
		assert!(graph.is_empty());
		assert_eq!(summarize(&graph, 3), GraphSummary::default());
	}
}
