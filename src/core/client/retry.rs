use std::time::Duration;

use rand::Rng;
use reqwest::{RequestBuilder, Response};

use crate::core::FhError;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
        /// Whether to apply random jitter (+/- 50%) to the delay.
        jitter: bool,
    },
}

impl Backoff {
    fn delay(&self, attempt: u32) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let exp = i32::try_from(attempt).unwrap_or(i32::MAX);
                let raw = base.as_secs_f64() * factor.powi(exp);
                let capped = raw.min(max.as_secs_f64());
                let scaled = if *jitter { capped * jitter_factor() } else { capped };
                Duration::from_secs_f64(scaled.max(0.0))
            }
        }
    }
}

fn jitter_factor() -> f64 {
    rand::thread_rng().gen_range(0.5..1.5)
}

/// Configuration for the automatic retry mechanism.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl RetryConfig {
    /// A policy that sends every request exactly once. This is the client default.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 4,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(200),
                factor: 2.0,
                max: Duration::from_secs(3),
                jitter: true,
            },
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

/// Defines the behavior of the in-memory cache for an API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Read from the cache if a non-expired entry is present; otherwise, fetch from the network
    /// and write the response to the cache. (Default)
    #[default]
    Use,
    /// Always fetch from the network, bypassing any cached entry, and write the new response to the cache.
    Refresh,
    /// Always fetch from the network and do not read from or write to the cache.
    Bypass,
}

impl super::FhClient {
    /// Sends `req`, retrying per `retry_override` or the client's policy.
    pub(crate) async fn send_with_retry(
        &self,
        req: RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<Response, FhError> {
        let cfg = retry_override.unwrap_or(self.retry_config());
        let mut attempt: u32 = 0;

        loop {
            let can_retry = cfg.enabled && attempt < cfg.max_retries;
            let this_try = if can_retry {
                req.try_clone()
                    .ok_or_else(|| FhError::InvalidParams("request body is not cloneable".into()))?
            } else {
                return Ok(req.send().await?);
            };

            match this_try.send().await {
                Ok(resp) if cfg.retry_on_status.contains(&resp.status().as_u16()) => {
                    tracing::debug!(status = resp.status().as_u16(), attempt, "retrying on status");
                }
                Ok(resp) => return Ok(resp),
                Err(e)
                    if (e.is_timeout() && cfg.retry_on_timeout)
                        || (e.is_connect() && cfg.retry_on_connect) =>
                {
                    tracing::debug!(error = %e, attempt, "retrying on transport error");
                }
                Err(e) => return Err(e.into()),
            }

            tokio::time::sleep(cfg.backoff.delay(attempt)).await;
            attempt += 1;
        }
    }
}
