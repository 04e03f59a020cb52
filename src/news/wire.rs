use serde::Deserialize;

use super::model::{ArticleId, NewsArticle, NewsKind};

/// One record from `company-news` or `news`. Every field is optional on the wire.
#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct RawArticle {
    #[serde(default)]
    pub(crate) id: Option<ArticleId>,
    #[serde(default)]
    pub(crate) category: Option<String>,
    #[serde(default)]
    pub(crate) datetime: Option<i64>,
    #[serde(default)]
    pub(crate) headline: Option<String>,
    #[serde(default)]
    pub(crate) image: Option<String>,
    #[serde(default)]
    pub(crate) source: Option<String>,
    #[serde(default)]
    pub(crate) summary: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

impl RawArticle {
    /// Usable articles have a headline, a link and a publication time.
    pub(crate) fn is_valid(&self) -> bool {
        non_blank(self.headline.as_deref()).is_some()
            && non_blank(self.url.as_deref()).is_some()
            && self.datetime.is_some_and(|t| t > 0)
    }

    /// Identity used to collapse duplicates: id, else url, else lowercased headline.
    pub(crate) fn dedup_key(&self) -> Option<String> {
        if let Some(id) = &self.id {
            let key = id.to_string();
            if !key.is_empty() {
                return Some(key);
            }
        }
        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            return Some(url.to_string());
        }
        non_blank(self.headline.as_deref()).map(str::to_lowercase)
    }

    /// Map a validated record. Callers must check [`RawArticle::is_valid`] first.
    pub(crate) fn normalize(
        self,
        kind: NewsKind,
        symbol: Option<&str>,
        source_index: usize,
    ) -> NewsArticle {
        let (default_source, default_category) = match kind {
            NewsKind::Company => ("Company News", "company"),
            NewsKind::General => ("Market News", "general"),
        };

        let category = match kind {
            NewsKind::Company => default_category.to_string(),
            NewsKind::General => non_blank(self.category.as_deref())
                .unwrap_or(default_category)
                .to_string(),
        };

        NewsArticle {
            id: self.id,
            headline: self.headline.as_deref().unwrap_or_default().trim().to_string(),
            summary: self.summary.as_deref().unwrap_or_default().trim().to_string(),
            url: self.url.as_deref().unwrap_or_default().trim().to_string(),
            datetime: self.datetime.unwrap_or_default(),
            source: non_blank(self.source.as_deref())
                .unwrap_or(default_source)
                .to_string(),
            image: non_blank(self.image.as_deref()).map(str::to_string),
            category,
            kind,
            symbol: symbol.map(str::to_string),
            source_index,
        }
    }
}

/// Decode a news list body record by record.
///
/// A body that is not a JSON array yields no articles; records that do not fit
/// [`RawArticle`] are skipped rather than failing the batch.
pub(crate) fn parse_articles(body: &str) -> Result<Vec<RawArticle>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
