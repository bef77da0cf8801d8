use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Monitored app service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
	Ixio,
	AiBizcall,
	SohoPackage,
}

impl Service {
	pub const ALL: [Service; 3] = [Service::Ixio, Service::AiBizcall, Service::SohoPackage];

	pub fn id(self) -> &'static str {
		match self {
			Service::Ixio => "ixio",
			Service::AiBizcall => "ai-bizcall",
			Service::SohoPackage => "soho-package",
		}
	}

	pub fn display_name(self) -> &'static str {
		match self {
			Service::Ixio => "ixi-O",
			Service::AiBizcall => "AI BizCall",
			Service::SohoPackage => "SOHO Package",
		}
	}

	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|s| s.id() == id)
	}
}

/// Review channel a keyword aggregate can be restricted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
	GooglePlay,
	AppStore,
	NaverBlog,
	NaverCafe,
}

impl Source {
	pub const ALL: [Source; 4] = [
		Source::GooglePlay,
		Source::AppStore,
		Source::NaverBlog,
		Source::NaverCafe,
	];

	pub fn query_value(self) -> &'static str {
		match self {
			Source::GooglePlay => "google_play",
			Source::AppStore => "app_store",
			Source::NaverBlog => "naver_blog",
			Source::NaverCafe => "naver_cafe",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Source::GooglePlay => "Google Play",
			Source::AppStore => "App Store",
			Source::NaverBlog => "Naver Blog",
			Source::NaverCafe => "Naver Cafe",
		}
	}

	pub fn icon(self) -> &'static str {
		match self {
			Source::GooglePlay => "▶",
			Source::AppStore => "◆",
			Source::NaverBlog => "✎",
			Source::NaverCafe => "☕",
		}
	}
}

/// Inclusive review date window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
	pub start: NaiveDate,
	pub end: NaiveDate,
}

impl DateRange {
	/// Window of `days` ending at `end`.
	pub fn ending_at(end: NaiveDate, days: u64) -> Self {
		let start = end.checked_sub_days(Days::new(days)).unwrap_or(end);
		Self { start, end }
	}

	/// Reversed bounds are swapped.
	pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
		Self {
			start: a.min(b),
			end: a.max(b),
		}
	}

	pub fn last_days(days: u64) -> Self {
		Self::ending_at(Utc::now().date_naive(), days)
	}
}

/// Filter selection owned by the dashboard shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
	pub service: Service,
	pub sources: Vec<Source>,
	pub date_range: DateRange,
}

impl Default for FilterState {
	fn default() -> Self {
		Self {
			service: Service::Ixio,
			sources: Source::ALL.to_vec(),
			date_range: DateRange::last_days(30),
		}
	}
}

impl FilterState {
	pub fn toggle_source(&mut self, source: Source) {
		if let Some(pos) = self.sources.iter().position(|s| *s == source) {
			self.sources.remove(pos);
		} else {
			self.sources.push(source);
			self.sources.sort_by_key(|s| Source::ALL.iter().position(|a| a == s));
		}
	}

	fn sources_param(&self) -> String {
		self.sources
			.iter()
			.map(|s| s.query_value())
			.collect::<Vec<_>>()
			.join(",")
	}

	/// Query parameters shared by every request made for this filter.
	pub fn query_params(&self) -> Vec<(&'static str, String)> {
		vec![
			("service", self.service.id().to_string()),
			("sources", self.sources_param()),
			("startDate", self.date_range.start.format("%Y-%m-%d").to_string()),
			("endDate", self.date_range.end.format("%Y-%m-%d").to_string()),
		]
	}

	/// Key identifying responses that belong to the same filter selection.
	pub fn cache_key(&self) -> String {
		format!(
			"{}|{}|{}..{}",
			self.service.id(),
			self.sources_param(),
			self.date_range.start,
			self.date_range.end
		)
	}
}
