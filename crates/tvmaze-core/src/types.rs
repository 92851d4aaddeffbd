//! Core data types for the show browser
//!
//! Raw upstream records are plain JSON; the typed records here are only
//! ever built from normalized JSON, so every field is guaranteed present.

use std::fmt;

use scraper::Html;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::normalize::{DefaultSpec, normalize};

/// Catalog identifier of a show
pub type ShowId = i64;

/// Sentinel id given to shows that arrive without one
pub const MISSING_SHOW_ID: ShowId = -1;

/// Poster shown when upstream has no image for a show
pub const MISSING_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

pub const MISSING_SHOW_NAME: &str = "No Name Found";
pub const MISSING_SUMMARY: &str = "No Summary Found";
pub const MISSING_EPISODE_NAME: &str = "No Name";
pub const MISSING_EPISODE_NUMBER: &str = "?";

impl DefaultSpec {
    /// Defaults applied to every show before display
    pub fn shows() -> Self {
        DefaultSpec::new()
            .field_where("id", MISSING_SHOW_ID, Value::is_i64)
            .field_where("name", MISSING_SHOW_NAME, Value::is_string)
            .field_where("summary", MISSING_SUMMARY, Value::is_string)
            .nested_where(
                "image",
                "medium",
                serde_json::json!({ "medium": MISSING_IMAGE_URL }),
                Value::is_string,
            )
    }

    /// Defaults applied to every episode before display
    pub fn episodes() -> Self {
        DefaultSpec::new()
            .field_where("name", MISSING_EPISODE_NAME, Value::is_string)
            .field_where("season", MISSING_EPISODE_NUMBER, is_count_or_label)
            .field_where("number", MISSING_EPISODE_NUMBER, is_count_or_label)
    }
}

fn is_count_or_label(value: &Value) -> bool {
    value.is_i64() || value.is_string()
}

/// One entry of a show search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Upstream relevance score
    #[serde(default)]
    pub score: Option<f64>,

    /// Raw, unnormalized show record
    #[serde(default)]
    pub show: Value,
}

/// Poster image of a show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowImage {
    /// Medium-size poster URL; never empty after normalization
    pub medium: String,
}

/// A show ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowRecord {
    pub id: ShowId,
    pub name: String,
    /// Upstream summary, may contain HTML markup
    pub summary: String,
    pub image: ShowImage,
}

impl ShowRecord {
    /// Normalize a raw show and convert it to a typed record
    ///
    /// Fields of the wrong type fall back to their defaults.
    ///
    /// # Errors
    /// `DecodeError` only if the show defaults themselves stop matching
    /// this struct.
    pub fn from_raw(raw: &Value) -> Result<Self> {
        let normalized = normalize(&DefaultSpec::shows(), raw);
        Ok(serde_json::from_value(Value::Object(normalized))?)
    }

    /// False for shows that came without a catalog id
    pub fn has_catalog_id(&self) -> bool {
        self.id != MISSING_SHOW_ID
    }

    /// Alt text for the poster image
    pub fn poster_alt(&self) -> String {
        format!("Poster for {}", self.name)
    }

    /// Summary with markup stripped and whitespace collapsed
    pub fn summary_text(&self) -> String {
        let fragment = Html::parse_fragment(&self.summary);
        let text: String = fragment.root_element().text().collect();
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Season or episode number: upstream sends integers, defaults are labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EpisodeNumber {
    Number(i64),
    Label(String),
}

impl fmt::Display for EpisodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpisodeNumber::Number(n) => write!(f, "{}", n),
            EpisodeNumber::Label(label) => f.write_str(label),
        }
    }
}

/// An episode ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub name: String,
    pub season: EpisodeNumber,
    pub number: EpisodeNumber,
}

impl EpisodeRecord {
    /// Normalize a raw episode and convert it to a typed record
    ///
    /// # Errors
    /// `DecodeError` only if the episode defaults stop matching this struct.
    pub fn from_raw(raw: &Value) -> Result<Self> {
        let normalized = normalize(&DefaultSpec::episodes(), raw);
        Ok(serde_json::from_value(Value::Object(normalized))?)
    }

    /// Single display line, e.g. "Season 1, Episode 1: Pilot"
    pub fn line(&self) -> String {
        format!("Season {}, Episode {}: {}", self.season, self.number, self.name)
    }
}
