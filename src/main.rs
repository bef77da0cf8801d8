use leptos::prelude::*;
use review_keyword_dashboard::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App)
}
