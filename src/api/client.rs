use futures::join;
use log::{debug, warn};
use thiserror::Error;

use super::filter::FilterState;
use super::types::{KeywordList, Sentiment, WordDatum, WordSets};

/// Failures while talking to the review API.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("request failed: {0}")]
	Request(#[from] reqwest::Error),
	#[error("server responded with HTTP {0}")]
	Status(u16),
	#[error("invalid response body: {0}")]
	Decode(#[from] serde_json::Error),
}

/// Thin JSON-over-HTTP client for the keyword aggregate endpoint.
#[derive(Clone, Debug)]
pub struct ApiClient {
	http: reqwest::Client,
	base_url: String,
	limit: usize,
}

impl ApiClient {
	pub fn new(base_url: impl Into<String>, limit: usize) -> Self {
		Self {
			http: reqwest::Client::new(),
			base_url: base_url.into().trim_end_matches('/').to_string(),
			limit,
		}
	}

	fn keywords_url(&self) -> String {
		format!("{}/api/keywords", self.base_url)
	}

	/// Fetch one sentiment partition of the keyword aggregate.
	pub async fn fetch_keywords(
		&self,
		filter: &FilterState,
		sentiment: Sentiment,
	) -> Result<Vec<WordDatum>, ApiError> {
		let mut params = filter.query_params();
		params.push(("sentiment", sentiment.as_str().to_string()));
		params.push(("limit", self.limit.to_string()));

		let resp = self
			.http
			.get(self.keywords_url())
			.query(&params)
			.send()
			.await?;
		let status = resp.status();
		if !status.is_success() {
			return Err(ApiError::Status(status.as_u16()));
		}
		let body = resp.text().await?;
		let KeywordList(words) = serde_json::from_str(&body)?;
		debug!(
			"fetched {} {} keywords for {}",
			words.len(),
			sentiment.as_str(),
			filter.cache_key()
		);
		Ok(words)
	}

	/// Fetch every partition concurrently. Positive and negative are
	/// required; a failing neutral partition degrades to an empty list.
	pub async fn fetch_word_sets(&self, filter: &FilterState) -> Result<WordSets, ApiError> {
		let (positive, negative, neutral) = join!(
			self.fetch_keywords(filter, Sentiment::Positive),
			self.fetch_keywords(filter, Sentiment::Negative),
			self.fetch_keywords(filter, Sentiment::Neutral),
		);
		let neutral = neutral.unwrap_or_else(|e| {
			warn!("neutral keywords unavailable: {e}");
			Vec::new()
		});
		Ok(WordSets {
			positive: positive?,
			negative: negative?,
			neutral,
		})
	}
}
