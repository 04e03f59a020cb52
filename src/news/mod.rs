//! The news aggregator.
//!
//! [`fetch_news`] (or [`NewsBuilder`] for finer control) returns at most [`MAX_ARTICLES`]
//! normalized articles, newest first, in one of two ways:
//!
//! - **Personalized**, when at least one non-blank symbol is given. Up to [`MAX_ROUNDS`] rounds
//!   rotate through the symbols (`A, B, A, B, ...`), each round asking `company-news` for the
//!   last [`WINDOW_DAYS`] days and keeping the first usable article not already picked. A
//!   failing round is logged and skipped.
//! - **General**, otherwise. One call to the `general` category feed, deduplicated by id, then
//!   url, then lowercased headline. A failing call yields an empty list.
//!
//! News lists are never cached. A missing API key fails both paths with
//! [`FhError::Config`].

mod api;
mod model;
mod wire;

pub use model::{ArticleId, NewsArticle, NewsKind};

use chrono::{NaiveDate, Utc};

use crate::core::{FhClient, FhError, client::RetryConfig};

/// Upper bound on the number of articles returned.
pub const MAX_ARTICLES: usize = 6;
/// Number of personalized rounds, and so the cap on `company-news` calls per fetch.
pub const MAX_ROUNDS: usize = 6;
/// Width of the personalized date window, in days before the reference date.
pub const WINDOW_DAYS: u64 = 5;

const GENERAL_CATEGORY: &str = "general";

/// Fetch the news feed for `symbols`, or the general market feed when there are none.
///
/// # Errors
///
/// Returns `FhError::Config` if the client has no API key. Fetch failures never surface:
/// they only reduce the number of articles returned.
pub async fn fetch_news<S: AsRef<str>>(
    client: &FhClient,
    symbols: Option<&[S]>,
) -> Result<Vec<NewsArticle>, FhError> {
    let mut builder = NewsBuilder::new(client);
    if let Some(symbols) = symbols {
        builder = builder.symbols(symbols.iter().map(|s| s.as_ref().to_string()));
    }
    builder.fetch().await
}

/// A builder for a news feed request.
#[derive(Debug, Clone)]
pub struct NewsBuilder {
    client: FhClient,
    symbols: Vec<String>,
    as_of: Option<NaiveDate>,
    rank_before_truncate: bool,
    retry_override: Option<RetryConfig>,
}

impl NewsBuilder {
    /// Creates a builder for the general feed; add symbols to personalize it.
    pub fn new(client: &FhClient) -> Self {
        Self {
            client: client.clone(),
            symbols: Vec::new(),
            as_of: None,
            rank_before_truncate: false,
            retry_override: None,
        }
    }

    /// Sets the symbols to personalize the feed with. They are trimmed and uppercased;
    /// blank entries are ignored.
    #[must_use]
    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Pins the last day of the personalized date window. Defaults to today (UTC).
    #[must_use]
    pub const fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// For the general feed, sort every unique article before keeping the newest
    /// [`MAX_ARTICLES`], instead of keeping the first ones in feed order.
    #[must_use]
    pub const fn rank_before_truncate(mut self, yes: bool) -> Self {
        self.rank_before_truncate = yes;
        self
    }

    /// Overrides the client's retry policy for the calls made by this request.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns `FhError::Config` if the client has no API key.
    #[tracing::instrument(skip(self), err, fields(symbols = ?self.symbols))]
    pub async fn fetch(self) -> Result<Vec<NewsArticle>, FhError> {
        self.client.api_key()?;

        let symbols = api::clean_symbols(self.symbols.as_slice());
        let retry = self.retry_override.as_ref();

        if symbols.is_empty() {
            return Ok(api::general(&self.client, self.rank_before_truncate, retry).await);
        }

        let as_of = self.as_of.unwrap_or_else(|| Utc::now().date_naive());
        Ok(api::personalized(&self.client, &symbols, as_of, retry).await)
    }
}
