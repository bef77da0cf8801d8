use serde::{Deserialize, Deserializer, Serialize};

/// Sentiment partition a keyword was aggregated under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
	Positive,
	Negative,
	#[serde(other)]
	Neutral,
}

impl Sentiment {
	pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

	pub fn as_str(self) -> &'static str {
		match self {
			Sentiment::Positive => "positive",
			Sentiment::Negative => "negative",
			Sentiment::Neutral => "neutral",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Sentiment::Positive => "Positive",
			Sentiment::Negative => "Negative",
			Sentiment::Neutral => "Neutral",
		}
	}
}

/// One keyword aggregate as delivered by the review API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordDatum {
	pub word: String,
	pub frequency: u32,
	pub sentiment: Sentiment,
}

impl WordDatum {
	pub fn new(word: impl Into<String>, frequency: u32, sentiment: Sentiment) -> Self {
		Self {
			word: word.into(),
			frequency,
			sentiment,
		}
	}

	/// Words must be non-blank and counted at least once to be laid out.
	pub fn is_valid(&self) -> bool {
		self.frequency >= 1 && !self.word.trim().is_empty()
	}
}

#[derive(Deserialize)]
struct WireWord {
	#[serde(default)]
	word: String,
	#[serde(default)]
	frequency: i64,
	#[serde(default = "neutral")]
	sentiment: Sentiment,
}

fn neutral() -> Sentiment {
	Sentiment::Neutral
}

impl WireWord {
	fn into_datum(self) -> Option<WordDatum> {
		let frequency = u32::try_from(self.frequency).ok()?;
		let datum = WordDatum::new(self.word.trim(), frequency, self.sentiment);
		datum.is_valid().then_some(datum)
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireKeywords {
	Bare(Vec<WireWord>),
	Wrapped {
		#[serde(alias = "words")]
		keywords: Vec<WireWord>,
	},
}

/// Decoded keyword list; entries with a blank word or a non-positive
/// frequency are dropped instead of failing the whole response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordList(pub Vec<WordDatum>);

impl<'de> Deserialize<'de> for KeywordList {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let wire = match WireKeywords::deserialize(deserializer)? {
			WireKeywords::Bare(words) | WireKeywords::Wrapped { keywords: words } => words,
		};
		Ok(KeywordList(
			wire.into_iter().filter_map(WireWord::into_datum).collect(),
		))
	}
}

/// All sentiment partitions for a single filter, replaced as one value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordSets {
	pub positive: Vec<WordDatum>,
	pub negative: Vec<WordDatum>,
	pub neutral: Vec<WordDatum>,
}

impl WordSets {
	pub fn get(&self, sentiment: Sentiment) -> &[WordDatum] {
		match sentiment {
			Sentiment::Positive => &self.positive,
			Sentiment::Negative => &self.negative,
			Sentiment::Neutral => &self.neutral,
		}
	}

	/// Positive, negative and neutral partitions, in that order.
	pub fn partitions(&self) -> [Vec<WordDatum>; 3] {
		Sentiment::ALL.map(|s| self.get(s).to_vec())
	}

	pub fn is_empty(&self) -> bool {
		Sentiment::ALL.iter().all(|s| self.get(*s).is_empty())
	}
}

/// Fetch lifecycle as seen by the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
	#[default]
	Loading,
	Ready,
	Failed(String),
}
