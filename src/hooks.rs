//! Reactive data plumbing between the filter state and the canvases.

use std::rc::Rc;
use std::time::Duration;

use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info, warn};

use crate::api::{ApiClient, FilterState, LatestRequests, LoadState, WordSets};
use crate::config::DashboardConfig;

const FEED_KEY: &str = "keywords";

/// Latest keyword partitions for the current filter and their fetch status.
#[derive(Clone, Copy)]
pub struct KeywordFeed {
	pub word_sets: RwSignal<WordSets>,
	pub status: RwSignal<LoadState>,
}

/// Fetch keyword partitions whenever `filter` changes and on a fixed
/// refresh interval. Responses that were overtaken by a newer request are
/// discarded, so a slow response can never overwrite fresher data.
pub fn use_keyword_feed(filter: Signal<FilterState>) -> KeywordFeed {
	let config = use_context::<DashboardConfig>().unwrap_or_default();
	let client = ApiClient::new(config.resolved_api_base(), config.fetch_limit);
	let guard = Rc::new(LatestRequests::new());
	let feed = KeywordFeed {
		word_sets: RwSignal::new(WordSets::default()),
		status: RwSignal::new(LoadState::Loading),
	};

	let tick = RwSignal::new(0_u64);
	let every = Duration::from_secs(config.refresh_interval_secs.max(1));
	match set_interval_with_handle(move || tick.update(|t| *t += 1), every) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(e) => warn!("keyword refresh timer unavailable: {e:?}"),
	}

	Effect::new(move |prev: Option<String>| {
		tick.track();
		let filter = filter.get();
		let key = filter.cache_key();
		if prev.as_deref() != Some(key.as_str()) {
			info!("loading keywords for {key}");
			feed.status.set(LoadState::Loading);
		}

		let ticket = guard.issue(FEED_KEY);
		let (client, guard) = (client.clone(), guard.clone());
		spawn_local(async move {
			let result = client.fetch_word_sets(&filter).await;
			if !guard.is_latest(&ticket) {
				debug!("dropping superseded {} response for {}", ticket.key(), filter.cache_key());
				return;
			}
			match result {
				Ok(sets) => {
					if sets.is_empty() {
						info!("no keywords for {}", filter.cache_key());
					}
					if feed.word_sets.with_untracked(|current| *current != sets) {
						feed.word_sets.set(sets);
					}
					feed.status.set(LoadState::Ready);
				}
				Err(e) => {
					warn!("keyword fetch failed: {e}");
					feed.word_sets.set(WordSets::default());
					feed.status.set(LoadState::Failed(e.to_string()));
				}
			}
		});
		key
	});

	feed
}
