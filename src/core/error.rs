use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FhError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body could not be decoded as the expected JSON shape.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error (token stripped).
        url: String,
    },

    /// The requested resource does not exist (HTTP 404 or an empty record).
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that was requested (token stripped).
        url: String,
    },

    /// The API rejected the call because the key exceeded its quota (HTTP 429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that was requested (token stripped).
        url: String,
    },

    /// The API failed on its side (HTTP 5xx).
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that was requested (token stripped).
        url: String,
    },

    /// Required configuration (such as the API key) is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The caller supplied parameters that cannot be sent.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

impl FhError {
    /// Maps a non-success HTTP status to the matching variant.
    pub(crate) fn from_status(status: u16, url: String) -> Self {
        match status {
            404 => Self::NotFound { url },
            429 => Self::RateLimited { url },
            500..=599 => Self::ServerError { status, url },
            _ => Self::Status { status, url },
        }
    }

    /// Returns `true` for errors caused by missing configuration.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
