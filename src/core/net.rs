use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{
    FhClient, FhError,
    client::{CacheMode, RetryConfig},
};

/// Strip the API token so URLs can be logged and reported safely.
pub(crate) fn redact(url: &Url) -> String {
    let mut clean = url.clone();
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "token")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if kept.is_empty() {
        clean.set_query(None);
    } else {
        clean.query_pairs_mut().clear().extend_pairs(kept);
    }
    clean.to_string()
}

/// GET `url` and return the body text.
///
/// `ttl` is the revalidation window: `Some` lets the response be served from and written to the
/// client cache (subject to `cache_mode`); `None` always goes to the network and stores nothing.
pub(crate) async fn get_text(
    client: &FhClient,
    url: &Url,
    ttl: Option<Duration>,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<String, FhError> {
    if ttl.is_some()
        && cache_mode == CacheMode::Use
        && let Some(body) = client.cache_get(url).await
    {
        tracing::debug!(url = %redact(url), "cache hit");
        return Ok(body);
    }

    tracing::debug!(url = %redact(url), "GET");
    let req = client
        .http()
        .get(url.clone())
        .header("accept", "application/json");
    let resp = client.send_with_retry(req, retry_override).await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FhError::from_status(status.as_u16(), redact(url)));
    }

    let body = resp.text().await?;
    if let Some(ttl) = ttl
        && cache_mode != CacheMode::Bypass
    {
        client.cache_put(url, &body, ttl).await;
    }
    Ok(body)
}

/// GET `url` and decode the JSON body as `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &FhClient,
    url: &Url,
    ttl: Option<Duration>,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<T, FhError> {
    let body = get_text(client, url, ttl, cache_mode, retry_override).await?;
    Ok(serde_json::from_str(&body)?)
}
