use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::core::client::{CacheMode, RetryConfig};
use crate::core::{FhClient, FhError, net};
use crate::profile::fetch_profile;

/// Symbols offered when the user has not typed anything yet.
pub const POPULAR_SYMBOLS: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "META", "NVDA", "NFLX", "ORCL", "CRM", "ADBE",
    "INTC", "AMD", "PYPL", "UBER", "ZM", "SPOT", "SQ", "SHOP", "ROKU",
];

const DEFAULT_LIMIT: usize = 10;

/// One symbol match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub symbol: String,
    pub display_symbol: String,
    /// Company or instrument name.
    pub description: String,
    /// Instrument type as reported (e.g. `"Common Stock"`).
    pub kind: Option<String>,
    pub exchange: Option<String>,
}

/// Searches for symbols matching a query.
///
/// # Errors
///
/// Returns `FhError` if the API key is missing, the network request fails, or the response
/// cannot be parsed.
pub async fn search(client: &FhClient, query: &str) -> Result<Vec<SearchResult>, FhError> {
    SearchBuilder::new(client).query(query).fetch().await
}

/// A builder for symbol search.
#[derive(Debug, Clone)]
pub struct SearchBuilder {
    client: FhClient,
    query: Option<String>,
    limit: usize,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl SearchBuilder {
    /// Creates a builder with no query, which resolves to the popular symbols.
    pub fn new(client: &FhClient) -> Self {
        Self {
            client: client.clone(),
            query: None,
            limit: DEFAULT_LIMIT,
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the search text. Blank text behaves like no query.
    #[must_use]
    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.query = Some(q.into());
        self
    }

    /// Sets the maximum number of results.
    #[must_use]
    pub const fn limit(mut self, n: usize) -> Self {
        self.limit = n;
        self
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the search.
    ///
    /// With a query, the `search` endpoint is called once. Without one, profiles of
    /// [`POPULAR_SYMBOLS`] are looked up concurrently and any that fail are left out.
    ///
    /// # Errors
    ///
    /// Returns `FhError::Config` without an API key. With a query, transport, status and decode
    /// errors are returned as well; the popular-symbols path never fails otherwise.
    #[tracing::instrument(skip(self), err, fields(query = ?self.query))]
    pub async fn fetch(self) -> Result<Vec<SearchResult>, FhError> {
        self.client.api_key()?;

        match self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => self.fetch_query(q).await,
            None => Ok(self.fetch_popular().await),
        }
    }

    async fn fetch_query(&self, q: &str) -> Result<Vec<SearchResult>, FhError> {
        let mut url = self.client.endpoint("search")?;
        url.query_pairs_mut().append_pair("q", q);

        let ttl = Some(self.client.revalidation().search);
        let env: WireSearchEnvelope = net::get_json(
            &self.client,
            &url,
            ttl,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await?;

        Ok(env
            .result
            .unwrap_or_default()
            .into_iter()
            .filter_map(|r| {
                let symbol = r.symbol.filter(|s| !s.is_empty())?;
                Some(SearchResult {
                    display_symbol: r.display_symbol.unwrap_or_else(|| symbol.clone()),
                    description: r.description.unwrap_or_default(),
                    kind: r.kind.filter(|k| !k.is_empty()),
                    exchange: None,
                    symbol,
                })
            })
            .take(self.limit)
            .collect())
    }

    async fn fetch_popular(&self) -> Vec<SearchResult> {
        let symbols = &POPULAR_SYMBOLS[..self.limit.min(POPULAR_SYMBOLS.len())];
        let lookups = symbols.iter().map(|sym| async move {
            let res = fetch_profile(
                &self.client,
                sym,
                self.cache_mode,
                self.retry_override.as_ref(),
            )
            .await;
            (*sym, res)
        });

        join_all(lookups)
            .await
            .into_iter()
            .filter_map(|(sym, res)| match res {
                Ok(p) => Some(SearchResult {
                    symbol: sym.to_string(),
                    display_symbol: sym.to_string(),
                    description: p.name,
                    kind: Some("Common Stock".to_string()),
                    exchange: p.exchange,
                }),
                Err(e) => {
                    tracing::warn!(symbol = sym, error = %e, "profile lookup failed; omitting");
                    None
                }
            })
            .collect()
    }
}

/* ------------- Minimal serde mapping of /search ------------- */

#[derive(Deserialize)]
struct WireSearchEnvelope {
    #[serde(default)]
    result: Option<Vec<WireSearchResult>>,
}

#[derive(Deserialize)]
struct WireSearchResult {
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "displaySymbol", default)]
    display_symbol: Option<String>,
    #[serde(default)]
    symbol: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}
