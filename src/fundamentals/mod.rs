//! Basic financial metrics from `stock/metric`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::client::{CacheMode, RetryConfig};
use crate::core::conversions::format_pe;
use crate::core::{FhClient, FhError, net};

/// Selected ratios plus every numeric metric the provider returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicFinancials {
    pub symbol: String,
    /// Normalized annual P/E, falling back to trailing twelve months.
    pub pe_ratio: Option<f64>,
    pub week52_high: Option<f64>,
    pub week52_low: Option<f64>,
    pub beta: Option<f64>,
    /// Indicated annual dividend yield, in percent.
    pub dividend_yield: Option<f64>,
    /// All numeric entries of the `metric` object, keyed by provider name.
    pub metrics: HashMap<String, f64>,
}

impl BasicFinancials {
    /// P/E for display, e.g. `"28.4"`.
    #[must_use]
    pub fn pe_formatted(&self) -> Option<String> {
        self.pe_ratio.and_then(format_pe)
    }
}

/// Fetch basic financials for `symbol`.
///
/// # Errors
///
/// Returns `FhError::Config` without an API key, and transport or decode errors otherwise.
pub async fn financials(client: &FhClient, symbol: &str) -> Result<BasicFinancials, FhError> {
    fetch_financials(client, symbol, CacheMode::Use, None).await
}

pub(crate) async fn fetch_financials(
    client: &FhClient,
    symbol: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<BasicFinancials, FhError> {
    let mut url = client.endpoint("stock/metric")?;
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("metric", "all");

    let ttl = Some(client.revalidation().metric);
    let wire: WireMetricEnvelope =
        net::get_json(client, &url, ttl, cache_mode, retry_override).await?;

    // Non-numeric entries (dates, strings, nulls) are dropped.
    let metrics: HashMap<String, f64> = wire
        .metric
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| v.as_f64().map(|n| (k, n)))
        .collect();

    let get = |key: &str| metrics.get(key).copied();

    Ok(BasicFinancials {
        symbol: wire.symbol.unwrap_or_else(|| symbol.to_string()),
        pe_ratio: get("peNormalizedAnnual").or_else(|| get("peTTM")),
        week52_high: get("52WeekHigh"),
        week52_low: get("52WeekLow"),
        beta: get("beta"),
        dividend_yield: get("dividendYieldIndicatedAnnual"),
        metrics,
    })
}

#[derive(Deserialize)]
struct WireMetricEnvelope {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    metric: Option<HashMap<String, serde_json::Value>>,
}
