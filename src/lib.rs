//! signalist: watchlist and market-news backend over the Finnhub REST API.
//!
//! The centrepiece is the news aggregator in [`news`]: given a user's watchlist symbols it
//! returns at most six distinct, newest-first articles, rotating fairly across symbols, and
//! falls back to the general market feed when there are no symbols.
//!
//! Every operation takes an explicit [`FhClient`], which carries the HTTP pool, the API key
//! and a short-lived response cache.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), signalist::FhError> {
//! let client = signalist::FhClientBuilder::from_env()?.build()?;
//! let feed = signalist::fetch_news(&client, Some(&["AAPL", "MSFT"][..])).await?;
//! for a in feed {
//!     println!("[{}] {}", a.symbol.unwrap_or_default(), a.headline);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod digest;
pub mod fundamentals;
pub mod news;
pub mod profile;
pub mod quote;
pub mod search;
pub mod ticker;
pub mod watchlist;

pub use crate::core::{
    CacheMode, DigestUser, FhClient, FhClientBuilder, FhError, Revalidation, RetryConfig,
    UserDirectory, WatchlistSource,
};
pub use digest::{NewsDigest, run_news_digest};
pub use fundamentals::{BasicFinancials, financials};
pub use news::{ArticleId, NewsArticle, NewsBuilder, NewsKind, fetch_news};
pub use profile::{CompanyProfile, profile};
pub use quote::{Quote, quote};
pub use search::{SearchBuilder, SearchResult, search};
pub use ticker::{StockDetails, Ticker};
pub use watchlist::{WatchlistItem, WatchlistRow, symbols_of, watchlist_with_data};

#[cfg(feature = "tracing-subscriber")]
/// Installs a `fmt` subscriber honouring `RUST_LOG`. Safe to call more than once.
pub fn init_tracing_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
