use serde::Serialize;

use crate::{
    FhClient, FhError,
    core::client::{CacheMode, RetryConfig},
    fundamentals::{BasicFinancials, fetch_financials},
    profile::{CompanyProfile, fetch_profile},
    quote::{Quote, fetch_quote},
};

/// Everything the stock page shows about one symbol.
///
/// Each part is fetched independently; a part that failed to load is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockDetails {
    pub symbol: String,
    /// Profile name, or the symbol when the profile is unavailable.
    pub company: String,
    pub quote: Option<Quote>,
    pub profile: Option<CompanyProfile>,
    pub financials: Option<BasicFinancials>,
}

impl StockDetails {
    #[must_use]
    pub fn price_formatted(&self) -> Option<String> {
        self.quote.as_ref().map(Quote::price_formatted)
    }

    #[must_use]
    pub fn change_formatted(&self) -> Option<String> {
        self.quote.as_ref().and_then(Quote::change_formatted)
    }

    #[must_use]
    pub fn market_cap_formatted(&self) -> Option<String> {
        self.profile
            .as_ref()
            .and_then(CompanyProfile::market_cap_formatted)
    }

    #[must_use]
    pub fn pe_formatted(&self) -> Option<String> {
        self.financials
            .as_ref()
            .and_then(BasicFinancials::pe_formatted)
    }
}

/// Log a failed part and carry on without it.
fn log_err<T>(res: Result<T, FhError>, part: &str, symbol: &str) -> Option<T> {
    match res {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::warn!(symbol, part, error = %e, "detail part failed; leaving it empty");
            None
        }
    }
}

pub(super) async fn fetch_details(
    client: &FhClient,
    symbol: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<StockDetails, FhError> {
    client.api_key()?;

    let (quote_res, profile_res, financials_res) = tokio::join!(
        fetch_quote(client, symbol, cache_mode, retry_override),
        fetch_profile(client, symbol, cache_mode, retry_override),
        fetch_financials(client, symbol, cache_mode, retry_override)
    );

    let quote = log_err(quote_res, "quote", symbol);
    let profile = log_err(profile_res, "profile", symbol);
    let financials = log_err(financials_res, "financials", symbol);

    Ok(StockDetails {
        symbol: symbol.to_string(),
        company: profile
            .as_ref()
            .map_or_else(|| symbol.to_string(), |p| p.name.clone()),
        quote,
        profile,
        financials,
    })
}
