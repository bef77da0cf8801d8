use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use log::{debug, warn};
use web_sys::{HtmlCanvasElement, MouseEvent, WheelEvent};

use super::graph::{build_graph, summarize};
use super::layout::layout_graph;
use super::render;
use super::state::NetworkState;
use super::types::GraphSummary;
use crate::api::WordSets;
use crate::components::canvas::{self, context_2d, event_position, fit_canvas, set_cursor};
use crate::config::DashboardConfig;

const DEFAULT_SIZE: (f64, f64) = (600.0, 400.0);

fn draw(state: &NetworkState, canvas: &HtmlCanvasElement) {
	match context_2d(canvas) {
		Some(ctx) => canvas::apply(&render::render(state), &ctx),
		None => warn!("keyword network: 2d context unavailable"),
	}
}

/// Build the graph from scratch, run the force layout for the current canvas
/// size and redraw. Returns the summary of the new graph.
fn rebuild(
	canvas: &HtmlCanvasElement,
	sets: &WordSets,
	size: (Option<f64>, Option<f64>),
	config: &DashboardConfig,
	state: &RefCell<NetworkState>,
) -> GraphSummary {
	let (w, h) = fit_canvas(canvas, size.0, size.1, DEFAULT_SIZE);
	let mut graph = build_graph(&sets.partitions(), &config.graph);
	layout_graph(&mut graph.nodes, &graph.edges, w, h, &config.force);
	let summary = summarize(&graph, config.graph.min_cluster_size);
	debug!(
		"keyword network: {} nodes, {} edges, {} clusters",
		summary.nodes, summary.edges, summary.clusters
	);
	*state.borrow_mut() = NetworkState::new(graph, w, h);
	draw(&state.borrow(), canvas);
	summary
}

#[component]
pub fn KeywordNetworkCanvas(
	#[prop(into)] word_sets: Signal<WordSets>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(optional)] on_keyword_selected: Option<Callback<String>>,
) -> impl IntoView {
	let config = use_context::<DashboardConfig>().unwrap_or_default();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<NetworkState>> = Rc::new(RefCell::new(NetworkState::default()));
	let summary = RwSignal::new(GraphSummary::default());
	let size = (width, height);

	let (state_init, config_init) = (state.clone(), config.clone());
	Effect::new(move |_| {
		let sets = word_sets.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		summary.set(rebuild(&canvas, &sets, size, &config_init, &state_init));
	});

	if width.is_none() || height.is_none() {
		let state_resize = state.clone();
		let handle = window_event_listener(ev::resize, move |_| {
			let Some(canvas) = canvas_ref.get_untracked() else {
				return;
			};
			let canvas: HtmlCanvasElement = canvas.into();
			let sets = word_sets.get_untracked();
			summary.set(rebuild(&canvas, &sets, size, &config, &state_resize));
		});
		on_cleanup(move || handle.remove());
	}

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = event_position(&canvas, &ev);
		state_md.borrow_mut().start_pan(x, y);
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = event_position(&canvas, &ev);
		let mut s = state_mm.borrow_mut();

		if s.move_pan(x, y) {
			set_cursor(&canvas, "grabbing");
			draw(&s, &canvas);
			return;
		}
		let hovered = s.node_at_position(x, y);
		if s.set_hover(hovered) {
			set_cursor(&canvas, if hovered.is_some() { "pointer" } else { "grab" });
			draw(&s, &canvas);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = event_position(&canvas, &ev);
		let selected = {
			let mut s = state_mu.borrow_mut();
			let was_click = s.end_pan();
			set_cursor(&canvas, "grab");
			if was_click {
				s.node_at_position(x, y)
					.map(|idx| s.graph.nodes[idx].id.clone())
			} else {
				None
			}
		};
		if let (Some(id), Some(cb)) = (selected, on_keyword_selected) {
			cb.run(id);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let mut s = state_ml.borrow_mut();
		s.end_pan();
		s.set_hover(None);
		draw(&s, &canvas);
	};

	let state_wh = state;
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = event_position(&canvas, &ev);
		let mut s = state_wh.borrow_mut();
		s.zoom_at(x, y, ev.delta_y());
		draw(&s, &canvas);
	};

	view! {
		<div class="keyword-network">
			<canvas
				node_ref=canvas_ref
				class="keyword-network-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
			<p class="network-summary">
				{move || {
					let s = summary.get();
					format!("{} keywords · {} links · {} clusters", s.nodes, s.edges, s.clusters)
				}}
			</p>
		</div>
	}
}
