use chrono::NaiveDate;
use leptos::prelude::*;

use crate::api::{DateRange, FilterState, Service, Source};

fn parse_date(value: &str) -> Option<NaiveDate> {
	NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Service, channel and date-range controls writing into `filter`.
#[component]
pub fn FilterBar(filter: RwSignal<FilterState>) -> impl IntoView {
	let services = Service::ALL
		.into_iter()
		.map(|s| view! { <option value=s.id()>{s.display_name()}</option> })
		.collect_view();

	let sources = Source::ALL
		.into_iter()
		.map(|source| {
			view! {
				<label class="source-toggle">
					<input
						type="checkbox"
						prop:checked=move || filter.with(|f| f.sources.contains(&source))
						on:change=move |_| filter.update(|f| f.toggle_source(source))
					/>
					{format!("{} {}", source.icon(), source.label())}
				</label>
			}
		})
		.collect_view();

	view! {
		<div class="filter-bar">
			<select
				prop:value=move || filter.with(|f| f.service.id())
				on:change=move |ev| {
					if let Some(service) = Service::from_id(&event_target_value(&ev)) {
						filter.update(|f| f.service = service);
					}
				}
			>
				{services}
			</select>
			<div class="sources">{sources}</div>
			<input
				type="date"
				prop:value=move || filter.with(|f| f.date_range.start.to_string())
				on:change=move |ev| {
					if let Some(start) = parse_date(&event_target_value(&ev)) {
						filter.update(|f| f.date_range = DateRange::new(start, f.date_range.end));
					}
				}
			/>
			<input
				type="date"
				prop:value=move || filter.with(|f| f.date_range.end.to_string())
				on:change=move |ev| {
					if let Some(end) = parse_date(&event_target_value(&ev)) {
						filter.update(|f| f.date_range = DateRange::new(f.date_range.start, end));
					}
				}
			/>
		</div>
	}
}
