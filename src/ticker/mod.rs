mod details;

pub use details::StockDetails;

use crate::core::client::RetryConfig;
use crate::{
    core::{CacheMode, FhClient, FhError},
    fundamentals::{self, BasicFinancials},
    news::{NewsArticle, NewsBuilder},
    profile::{self, CompanyProfile},
    quote::{self, Quote},
};

/// A high-level interface for a single ticker symbol.
///
/// A `Ticker` is created with a [`FhClient`] and a symbol. The symbol is trimmed and
/// uppercased, so `" aapl "` and `"AAPL"` address the same instrument.
///
/// # Example
///
/// ```no_run
/// # use signalist::{FhClient, Ticker};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FhClient::builder().api_key("your-key").build()?;
/// let ticker = Ticker::new(&client, "TSLA");
///
/// let details = ticker.details().await?;
/// println!("{} {}", details.company, details.price_formatted().unwrap_or_default());
/// # Ok(())
/// # }
/// ```
pub struct Ticker {
    #[doc(hidden)]
    pub(crate) client: FhClient,
    #[doc(hidden)]
    pub(crate) symbol: String,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl Ticker {
    /// Creates a new `Ticker` for a given symbol.
    pub fn new(client: &FhClient, symbol: impl AsRef<str>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.as_ref().trim().to_uppercase(),
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// The normalized symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Sets the cache mode for all subsequent API calls made by this `Ticker` instance.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the client's default retry policy for all subsequent API calls made by this `Ticker` instance.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches the latest quote.
    ///
    /// # Errors
    ///
    /// This method will return an error if the request fails or the response cannot be parsed.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn quote(&self) -> Result<Quote, FhError> {
        quote::fetch_quote(
            &self.client,
            &self.symbol,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }

    /// Fetches the company profile.
    ///
    /// # Errors
    ///
    /// This method will return an error if the request fails or the symbol is unknown.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn profile(&self) -> Result<CompanyProfile, FhError> {
        profile::fetch_profile(
            &self.client,
            &self.symbol,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }

    /// Fetches basic financial metrics.
    ///
    /// # Errors
    ///
    /// This method will return an error if the request fails or the response cannot be parsed.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn financials(&self) -> Result<BasicFinancials, FhError> {
        fundamentals::fetch_financials(
            &self.client,
            &self.symbol,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }

    /// Fetches quote, profile and financials concurrently.
    ///
    /// A part that fails to load is logged and left as `None`; it does not fail the others.
    ///
    /// # Errors
    ///
    /// Only a missing API key fails the whole call.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn details(&self) -> Result<StockDetails, FhError> {
        details::fetch_details(
            &self.client,
            &self.symbol,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }

    /// Personalized news for this symbol alone.
    ///
    /// # Errors
    ///
    /// Returns `FhError::Config` if the client has no API key.
    pub async fn news(&self) -> Result<Vec<NewsArticle>, FhError> {
        NewsBuilder::new(&self.client)
            .symbols([self.symbol.as_str()])
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await
    }
}
