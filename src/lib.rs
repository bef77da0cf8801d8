//! Leptos client-side review keyword dashboard: word clouds and a keyword
//! co-occurrence network drawn on canvas from the review API.

use getrandom as _;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info, warn};

// Modules
mod api;
mod components;
mod config;
mod hooks;
mod pages;

// Top-Level pages
use crate::config::DashboardConfig;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Element id of an optional inline JSON document overriding the defaults.
const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

fn load_config() -> DashboardConfig {
	let inline = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
		.and_then(|el| el.text_content());
	match inline {
		Some(json) => DashboardConfig::from_json(&json).unwrap_or_else(|e| {
			warn!("ignoring invalid #{CONFIG_ELEMENT_ID}: {e}");
			DashboardConfig::default()
		}),
		None => DashboardConfig::default(),
	}
}

/// An app router which renders the dashboard and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(load_config());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Review Keyword Monitor" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
