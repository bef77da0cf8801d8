use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::layout::layout_words;
use super::render;
use super::state::WordCloudState;
use crate::api::WordDatum;
use crate::components::canvas::{self, context_2d, event_position, fit_canvas, set_cursor};
use crate::config::{DashboardConfig, WordCloudConfig};

const DEFAULT_SIZE: (f64, f64) = (400.0, 300.0);

fn draw(state: &WordCloudState, canvas: &HtmlCanvasElement, config: &WordCloudConfig) {
	if let Some(ctx) = context_2d(canvas) {
		let cmds = render::render(state, &config.font_family, &ctx);
		canvas::apply(&cmds, &ctx);
	}
}

/// Recompute the whole layout for the current canvas size and redraw.
fn relayout(
	canvas: &HtmlCanvasElement,
	words: &[WordDatum],
	size: (Option<f64>, Option<f64>),
	config: &WordCloudConfig,
	state: &RefCell<WordCloudState>,
	keep_selection: bool,
) {
	let (w, h) = fit_canvas(canvas, size.0, size.1, DEFAULT_SIZE);
	let Some(ctx) = context_2d(canvas) else {
		warn!("word cloud: 2d context unavailable");
		return;
	};
	let mut rng = SmallRng::seed_from_u64(canvas::time_seed());
	let placed = layout_words(words, w, h, config, &ctx, &mut rng);
	debug!("word cloud: placed {}/{} words", placed.len(), words.len());
	state.borrow_mut().replace(placed, w, h, keep_selection);
	draw(&state.borrow(), canvas, config);
}

/// Word cloud for one sentiment partition.
///
/// `on_word_selected` receives `Some(word)` when a word is selected and
/// `None` when the selection is cleared, whether by a deselecting click or by
/// a relayout that no longer shows the word. When `selection` is given, the
/// cloud follows it so only one word is highlighted across the page.
#[component]
pub fn WordCloudCanvas(
	#[prop(into)] words: Signal<Vec<WordDatum>>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(optional)] on_word_selected: Option<Callback<Option<String>>>,
	#[prop(optional)] selection: Option<Signal<Option<String>>>,
) -> impl IntoView {
	let config = use_context::<DashboardConfig>()
		.unwrap_or_default()
		.word_cloud;
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<WordCloudState>> = Rc::new(RefCell::new(WordCloudState::default()));
	let size = (width, height);

	let notify = move |selected: Option<&str>| {
		if let Some(cb) = on_word_selected {
			cb.run(selected.map(str::to_string));
		}
	};

	// Full relayout on canvas size or data change; returns whether a selection
	// was lost in the process.
	let refresh = {
		let (state, config) = (state.clone(), config.clone());
		move |data: &[WordDatum], keep_selection: bool| -> bool {
			let Some(canvas) = canvas_ref.get_untracked() else {
				return false;
			};
			let canvas: HtmlCanvasElement = canvas.into();
			let had_selection = state.borrow().selected().is_some();
			relayout(&canvas, data, size, &config, &state, keep_selection);
			had_selection && state.borrow().selected().is_none()
		}
	};

	let refresh_data = refresh.clone();
	Effect::new(move |_| {
		let data = words.get();
		if canvas_ref.get().is_none() {
			return;
		}
		if refresh_data(&data, false) {
			notify(None);
		}
	});

	if width.is_none() || height.is_none() {
		let handle = window_event_listener(ev::resize, move |_| {
			if refresh(&words.get_untracked(), true) {
				notify(None);
			}
		});
		on_cleanup(move || handle.remove());
	}

	if let Some(selection) = selection {
		let (state_sync, config_sync) = (state.clone(), config.clone());
		Effect::new(move |_| {
			let external = selection.get();
			let Some(canvas) = canvas_ref.get() else {
				return;
			};
			let canvas: HtmlCanvasElement = canvas.into();
			let mut s = state_sync.borrow_mut();
			if s.sync_selection(external.as_deref()) {
				draw(&s, &canvas, &config_sync);
			}
		});
	}

	let (state_mm, config_mm) = (state.clone(), config.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = event_position(&canvas, &ev);
		let mut s = state_mm.borrow_mut();
		let hovered = s.word_at(x, y);
		if s.set_hover(hovered) {
			set_cursor(&canvas, if hovered.is_some() { "pointer" } else { "default" });
			draw(&s, &canvas, &config_mm);
		}
	};

	let (state_ml, config_ml) = (state.clone(), config.clone());
	let on_mouseleave = move |_: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let mut s = state_ml.borrow_mut();
		if s.set_hover(None) {
			draw(&s, &canvas, &config_ml);
		}
	};

	let (state_cl, config_cl) = (state.clone(), config);
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = event_position(&canvas, &ev);
		let changed = {
			let mut s = state_cl.borrow_mut();
			let changed = s.click(x, y);
			if changed {
				debug!("word cloud: selection is now {:?}", s.selected());
				draw(&s, &canvas, &config_cl);
			}
			changed.then(|| s.selected().map(str::to_string))
		};
		if let Some(selected) = changed {
			notify(selected.as_deref());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="word-cloud-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:click=on_click
			style="display: block;"
		/>
	}
}
