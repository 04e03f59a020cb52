//! Centralized constants for default endpoints, UA and revalidation windows.

use std::time::Duration;

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("signalist/", env!("CARGO_PKG_VERSION"));

/// Finnhub REST API base (endpoint paths are joined onto it, so keep the trailing slash).
pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1/";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "FINNHUB_API_KEY";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "FINNHUB_BASE_URL";

/// Live quotes move constantly.
pub const QUOTE_TTL: Duration = Duration::from_secs(15);

/// Company profiles barely change.
pub const PROFILE_TTL: Duration = Duration::from_secs(60 * 60);

/// Basic financials are refreshed by the provider at most daily.
pub const METRIC_TTL: Duration = Duration::from_secs(60 * 60);

pub const SEARCH_TTL: Duration = Duration::from_secs(30 * 60);
