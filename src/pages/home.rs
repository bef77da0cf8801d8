use leptos::prelude::*;

use crate::api::{FilterState, LoadState, Sentiment, WordDatum};
use crate::components::filter_bar::FilterBar;
use crate::components::keyword_network::KeywordNetworkCanvas;
use crate::components::word_cloud::WordCloudCanvas;
use crate::hooks::use_keyword_feed;

fn status_line(status: &LoadState) -> Option<&'static str> {
	match status {
		LoadState::Loading => Some("Loading keywords…"),
		LoadState::Ready => None,
		LoadState::Failed(_) => Some("Keywords could not be loaded. Showing no data."),
	}
}

/// Banner text for the keyword the dashboard is currently focused on.
fn selection_banner(selected: Option<&str>) -> Option<String> {
	selected.map(|w| format!("Filtering reviews by \"{w}\""))
}

#[component]
fn CloudPanel(
	sentiment: Sentiment,
	words: Signal<Vec<WordDatum>>,
	selection: Signal<Option<String>>,
	on_word_selected: Callback<Option<String>>,
) -> impl IntoView {
	view! {
		<section class=format!("panel cloud-{}", sentiment.as_str())>
			<h2>{format!("{} keywords", sentiment.label())}</h2>
			<WordCloudCanvas
				words=words
				width=Some(400.0)
				height=Some(300.0)
				on_word_selected=on_word_selected
				selection=selection
			/>
		</section>
	}
}

/// Keyword dashboard page
#[component]
pub fn Home() -> impl IntoView {
	let filter = RwSignal::new(FilterState::default());
	let feed = use_keyword_feed(filter.into());
	let selected = RwSignal::new(Option::<String>::None);

	// New data drops any highlight, so the banner goes with it.
	Effect::new(move |_| {
		feed.word_sets.track();
		selected.set(None);
	});

	let on_cloud_select = Callback::new(move |word: Option<String>| {
		match &word {
			Some(w) => log::info!("keyword selected: {w}"),
			None => log::info!("keyword selection cleared"),
		}
		selected.set(word);
	});
	let on_network_select = Callback::new(move |word: String| {
		log::info!("keyword selected: {word}");
		selected.set(Some(word));
	});
	let selection = Signal::from(selected);
	let positive = Signal::derive(move || feed.word_sets.with(|s| s.positive.clone()));
	let negative = Signal::derive(move || feed.word_sets.with(|s| s.negative.clone()));
	let word_sets = Signal::derive(move || feed.word_sets.get());

	view! {
		<div class="dashboard">
			<header>
				<h1>"Review Keyword Monitor"</h1>
				<FilterBar filter=filter />
				<p class="status">{move || feed.status.with(status_line)}</p>
				<p class="selection">{move || selected.with(|s| selection_banner(s.as_deref()))}</p>
			</header>
			<div class="clouds">
				<CloudPanel
					sentiment=Sentiment::Positive
					words=positive
					selection=selection
					on_word_selected=on_cloud_select
				/>
				<CloudPanel
					sentiment=Sentiment::Negative
					words=negative
					selection=selection
					on_word_selected=on_cloud_select
				/>
			</div>
			<section class="panel network">
				<h2>"Keyword network"</h2>
				<KeywordNetworkCanvas
					word_sets=word_sets
					width=Some(600.0)
					height=Some(400.0)
					on_keyword_selected=on_network_select
				/>
			</section>
		</div>
	}
}
