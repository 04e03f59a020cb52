//! Company profiles from `stock/profile2`.

use serde::{Deserialize, Serialize};

use crate::core::client::{CacheMode, RetryConfig};
use crate::core::conversions::format_market_cap;
use crate::core::{FhClient, FhError, net};

/// Static company information.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyProfile {
    pub name: String,
    pub ticker: String,
    pub exchange: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub industry: Option<String>,
    /// IPO date as sent by the provider (`YYYY-MM-DD`).
    pub ipo: Option<String>,
    pub logo: Option<String>,
    pub weburl: Option<String>,
    /// Market capitalization in millions of `currency`.
    pub market_capitalization: Option<f64>,
    /// Shares outstanding, in millions.
    pub share_outstanding: Option<f64>,
}

impl CompanyProfile {
    /// Market cap for display, e.g. `"$2.95T"`.
    #[must_use]
    pub fn market_cap_formatted(&self) -> Option<String> {
        self.market_capitalization.and_then(format_market_cap)
    }
}

/// Fetch the profile for `symbol`.
///
/// # Errors
///
/// Returns `FhError::Config` without an API key and `FhError::NotFound` when the provider
/// knows no company by that symbol.
pub async fn profile(client: &FhClient, symbol: &str) -> Result<CompanyProfile, FhError> {
    fetch_profile(client, symbol, CacheMode::Use, None).await
}

pub(crate) async fn fetch_profile(
    client: &FhClient,
    symbol: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<CompanyProfile, FhError> {
    let mut url = client.endpoint("stock/profile2")?;
    url.query_pairs_mut().append_pair("symbol", symbol);

    let ttl = Some(client.revalidation().profile);
    let wire: WireProfile = net::get_json(client, &url, ttl, cache_mode, retry_override).await?;

    // An unknown symbol is answered with `{}`.
    let name = wire
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| FhError::NotFound {
            url: net::redact(&url),
        })?;

    Ok(CompanyProfile {
        name,
        ticker: wire.ticker.unwrap_or_else(|| symbol.to_string()),
        exchange: wire.exchange,
        country: wire.country,
        currency: wire.currency,
        industry: wire.finnhub_industry,
        ipo: wire.ipo,
        logo: wire.logo.filter(|s| !s.is_empty()),
        weburl: wire.weburl.filter(|s| !s.is_empty()),
        market_capitalization: wire.market_capitalization,
        share_outstanding: wire.share_outstanding,
    })
}

/* --------- Minimal serde mapping for the API JSON --------- */

#[derive(Deserialize)]
struct WireProfile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    ticker: Option<String>,
    #[serde(default)]
    exchange: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(rename = "finnhubIndustry", default)]
    finnhub_industry: Option<String>,
    #[serde(default)]
    ipo: Option<String>,
    #[serde(default)]
    logo: Option<String>,
    #[serde(default)]
    weburl: Option<String>,
    #[serde(rename = "marketCapitalization", default)]
    market_capitalization: Option<f64>,
    #[serde(rename = "shareOutstanding", default)]
    share_outstanding: Option<f64>,
}
