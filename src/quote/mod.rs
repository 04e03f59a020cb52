use serde::{Deserialize, Serialize};

use crate::core::client::{CacheMode, RetryConfig};
use crate::core::conversions::{format_change_percent, format_price};
use crate::core::{FhClient, FhError, net};

/// A real-time quote snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub symbol: String,
    /// Current price.
    pub current: f64,
    /// Absolute change from the previous close.
    pub change: Option<f64>,
    /// Percent change from the previous close.
    pub percent_change: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub open: Option<f64>,
    pub previous_close: Option<f64>,
    /// Unix timestamp (seconds) of the last trade.
    pub timestamp: Option<i64>,
}

impl Quote {
    /// Current price, e.g. `"$189.84"`.
    #[must_use]
    pub fn price_formatted(&self) -> String {
        format_price(self.current)
    }

    /// Percent change, e.g. `"+1.23%"`.
    #[must_use]
    pub fn change_formatted(&self) -> Option<String> {
        self.percent_change.map(format_change_percent)
    }
}

/* ---------------- Public API ---------------- */

/// Fetch the latest quote for `symbol`.
///
/// # Errors
///
/// Returns `FhError::Config` without an API key, `FhError::NotFound` when the provider has no
/// price for the symbol, and transport or decode errors otherwise.
pub async fn quote(client: &FhClient, symbol: &str) -> Result<Quote, FhError> {
    fetch_quote(client, symbol, CacheMode::Use, None).await
}

pub(crate) async fn fetch_quote(
    client: &FhClient,
    symbol: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Quote, FhError> {
    let mut url = client.endpoint("quote")?;
    url.query_pairs_mut().append_pair("symbol", symbol);

    let ttl = Some(client.revalidation().quote);
    let wire: WireQuote = net::get_json(client, &url, ttl, cache_mode, retry_override).await?;

    // Unknown symbols come back as an all-zero record.
    match wire.c {
        Some(c) if c != 0.0 || wire.t.unwrap_or(0) != 0 => Ok(Quote {
            symbol: symbol.to_string(),
            current: c,
            change: wire.d,
            percent_change: wire.dp,
            high: wire.h,
            low: wire.l,
            open: wire.o,
            previous_close: wire.pc,
            timestamp: wire.t,
        }),
        _ => Err(FhError::NotFound {
            url: net::redact(&url),
        }),
    }
}

/* ---------------- Minimal serde for /quote ---------------- */

#[derive(Deserialize)]
struct WireQuote {
    #[serde(default)]
    c: Option<f64>,
    #[serde(default)]
    d: Option<f64>,
    #[serde(default)]
    dp: Option<f64>,
    #[serde(default)]
    h: Option<f64>,
    #[serde(default)]
    l: Option<f64>,
    #[serde(default)]
    o: Option<f64>,
    #[serde(default)]
    pc: Option<f64>,
    #[serde(default)]
    t: Option<i64>,
}
