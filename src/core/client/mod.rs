//! Public client surface + builder.
//! Internals are split into `retry` (send policy, cache modes) and `constants` (UA + defaults).

pub mod constants;
mod retry;

pub use retry::{Backoff, CacheMode, RetryConfig};

use crate::core::FhError;
use constants::{
    API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, METRIC_TTL, PROFILE_TTL, QUOTE_TTL, SEARCH_TTL,
    USER_AGENT,
};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use url::Url;

/// How long each kind of cached response may be served before it is refetched.
///
/// News lists have no entry here: they are always fetched fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revalidation {
    /// Window for live quotes.
    pub quote: Duration,
    /// Window for company profiles.
    pub profile: Duration,
    /// Window for basic financial metrics.
    pub metric: Duration,
    /// Window for symbol search results.
    pub search: Duration,
}

impl Default for Revalidation {
    fn default() -> Self {
        Self {
            quote: QUOTE_TTL,
            profile: PROFILE_TTL,
            metric: METRIC_TTL,
            search: SEARCH_TTL,
        }
    }
}

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

#[derive(Debug, Default)]
struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
}

/// Handle to the Finnhub API.
///
/// Cheap to clone: clones share the connection pool and the response cache.
#[derive(Debug, Clone)]
pub struct FhClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
    revalidation: Revalidation,
    retry: RetryConfig,
    cache: Option<Arc<CacheStore>>,
}

impl FhClient {
    /// Create a new builder.
    pub fn builder() -> FhClientBuilder {
        FhClientBuilder::default()
    }

    /// The configured API key.
    ///
    /// # Errors
    ///
    /// Returns `FhError::Config` when no key was configured.
    pub fn api_key(&self) -> Result<&str, FhError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| FhError::Config(format!("{API_KEY_ENV} is not configured")))
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub const fn revalidation(&self) -> &Revalidation {
        &self.revalidation
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) const fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Builds the URL for `path` with the API token appended.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, FhError> {
        let token = self.api_key()?;
        let mut url = self.base_url.join(path)?;
        url.query_pairs_mut().append_pair("token", token);
        Ok(url)
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        let store = self.cache.as_ref()?;
        let guard = store.map.read().await;
        if let Some(entry) = guard.get(url.as_str())
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.body.clone());
        }
        None
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str, ttl: Duration) {
        let Some(store) = &self.cache else {
            return;
        };
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at: Instant::now() + ttl,
        };
        store.map.write().await.insert(url.as_str().to_string(), entry);
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Debug)]
pub struct FhClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    revalidation: Revalidation,
    cache_enabled: bool,
    retry: RetryConfig,
}

impl Default for FhClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            user_agent: None,
            timeout: None,
            connect_timeout: None,
            revalidation: Revalidation::default(),
            cache_enabled: true,
            retry: RetryConfig::disabled(),
        }
    }
}

impl FhClientBuilder {
    /// Seed the builder from `FINNHUB_API_KEY` and `FINNHUB_BASE_URL`.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `FhError::Url` if `FINNHUB_BASE_URL` is set but not a valid URL.
    pub fn from_env() -> Result<Self, FhError> {
        let base_url = non_empty_env(BASE_URL_ENV)
            .map(|raw| Url::parse(&raw))
            .transpose()?;
        Ok(Self {
            api_key: non_empty_env(API_KEY_ENV),
            base_url,
            ..Self::default()
        })
    }

    /// Set the API key. Blank keys are treated as missing.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = (!key.trim().is_empty()).then_some(key);
        self
    }

    /// Override the API base (e.g., `https://finnhub.io/api/v1/`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Override the per-endpoint revalidation windows.
    pub fn revalidation(mut self, windows: Revalidation) -> Self {
        self.revalidation = windows;
        self
    }

    /// Turn the in-memory response cache on or off. Default: on.
    pub fn cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Set the default retry policy. Default: [`RetryConfig::disabled`].
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = cfg;
        self
    }

    pub fn build(self) -> Result<FhClient, FhError> {
        let mut base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        // `Url::join` drops the last segment unless the base ends in a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut httpb =
            Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build()?;

        Ok(FhClient {
            http,
            base_url,
            api_key: self.api_key,
            revalidation: self.revalidation,
            retry: self.retry,
            cache: self
                .cache_enabled
                .then(|| Arc::new(CacheStore::default())),
        })
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
