//! Review API access: wire types, filter encoding and the stale-response guard.

mod client;
mod filter;
mod guard;
mod types;

pub use client::ApiClient;
pub use filter::{DateRange, FilterState, Service, Source};
pub use guard::LatestRequests;
pub use types::{LoadState, Sentiment, WordDatum, WordSets};
