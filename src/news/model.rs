use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

use crate::core::conversions::i64_to_datetime;

/// Provider-assigned article identifier. Usually numeric, occasionally a string.
///
/// Any JSON scalar is accepted. Integral numbers that fit `i64` become [`ArticleId::Num`];
/// everything else (floats, integers beyond `i64`, strings, booleans) is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ArticleId {
    /// A numeric id.
    Num(i64),
    /// A string id.
    Str(String),
}

// Integral floats below 2^53 are exact.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

impl<'de> Deserialize<'de> for ArticleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(Self::Num(i));
                }
                match n.as_f64() {
                    #[allow(clippy::cast_possible_truncation)]
                    Some(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT_F64 => Ok(Self::Num(f as i64)),
                    _ => Ok(Self::Str(n.to_string())),
                }
            }
            Value::String(s) => Ok(Self::Str(s)),
            Value::Bool(b) => Ok(Self::Str(b.to_string())),
            Value::Null => Ok(Self::Str(String::new())),
            other => Err(de::Error::custom(format!("unsupported article id: {other}"))),
        }
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// Which feed an article came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsKind {
    /// Per-symbol company news (personalized feed).
    Company,
    /// The general market category feed.
    General,
}

/// A validated, normalized news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsArticle {
    /// Provider id, when the record carried one.
    pub id: Option<ArticleId>,
    /// Trimmed headline, never empty.
    pub headline: String,
    /// Trimmed summary; empty when the provider sent none.
    pub summary: String,
    /// Link to the full article, never empty.
    pub url: String,
    /// Unix timestamp (seconds) of publication.
    pub datetime: i64,
    /// Publisher name, or a feed-specific placeholder.
    pub source: String,
    /// Thumbnail URL, if any.
    pub image: Option<String>,
    /// Provider category (`"company"` for personalized articles).
    pub category: String,
    /// Feed the article was taken from.
    pub kind: NewsKind,
    /// Ticker the article was fetched for (personalized feed only).
    pub symbol: Option<String>,
    /// Round index (personalized) or position in the deduplicated list (general).
    pub source_index: usize,
}

impl NewsArticle {
    /// Publication time as a UTC datetime.
    #[must_use]
    pub fn published_at(&self) -> DateTime<Utc> {
        i64_to_datetime(self.datetime)
    }
}
