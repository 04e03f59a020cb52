//! Watchlist entries and their live-data rows.
//!
//! Storage is owned elsewhere; this module normalizes entries and decorates them with
//! quote, profile and metric data for display.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::core::{FhClient, FhError};
use crate::ticker::{StockDetails, Ticker};

/// A stored watchlist entry. `(user_id, symbol)` is unique in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistItem {
    pub user_id: String,
    /// Uppercase, trimmed ticker.
    pub symbol: String,
    pub company: String,
    pub added_at: DateTime<Utc>,
}

impl WatchlistItem {
    /// Creates an entry stamped now, normalizing the symbol and trimming the company name.
    pub fn new(user_id: impl Into<String>, symbol: &str, company: &str) -> Self {
        Self {
            user_id: user_id.into(),
            symbol: symbol.trim().to_uppercase(),
            company: company.trim().to_string(),
            added_at: Utc::now(),
        }
    }
}

/// A watchlist entry with display-ready market data. Missing data renders as `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchlistRow {
    pub item: WatchlistItem,
    pub price: Option<f64>,
    pub price_formatted: Option<String>,
    pub change_percent: Option<f64>,
    pub change_formatted: Option<String>,
    pub market_cap: Option<String>,
    pub pe_ratio: Option<String>,
}

impl WatchlistRow {
    fn bare(item: WatchlistItem) -> Self {
        Self {
            item,
            price: None,
            price_formatted: None,
            change_percent: None,
            change_formatted: None,
            market_cap: None,
            pe_ratio: None,
        }
    }

    fn from_details(item: WatchlistItem, d: &StockDetails) -> Self {
        Self {
            price: d.quote.as_ref().map(|q| q.current),
            price_formatted: d.price_formatted(),
            change_percent: d.quote.as_ref().and_then(|q| q.percent_change),
            change_formatted: d.change_formatted(),
            market_cap: d.market_cap_formatted(),
            pe_ratio: d.pe_formatted(),
            item,
        }
    }
}

/// Symbols of `items`, in order, for feeding the news aggregator.
#[must_use]
pub fn symbols_of(items: &[WatchlistItem]) -> Vec<String> {
    items.iter().map(|i| i.symbol.clone()).collect()
}

/// Decorate every entry with live data, concurrently. Output order matches `items`.
///
/// # Errors
///
/// Returns `FhError::Config` if the client has no API key. Any other per-item failure leaves
/// that row without market data.
pub async fn watchlist_with_data(
    client: &FhClient,
    items: Vec<WatchlistItem>,
) -> Result<Vec<WatchlistRow>, FhError> {
    client.api_key()?;

    let lookups = items.into_iter().map(|item| async move {
        match Ticker::new(client, &item.symbol).details().await {
            Ok(d) => WatchlistRow::from_details(item, &d),
            Err(e) => {
                tracing::warn!(symbol = %item.symbol, error = %e, "watchlist enrichment failed");
                WatchlistRow::bare(item)
            }
        }
    });

    Ok(join_all(lookups).await)
}
