//! Error types for the exa-fetch crate.
//!
//! All errors use stable string messages suitable for display to users.
//! The API key never appears in error messages.

/// Errors that can occur while resolving configuration or talking to the API.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Missing or invalid process configuration (API key, search options).
    /// Detected before any network access.
    #[error("config error: {0}")]
    Config(String),

    /// A network-level failure: connection refused, DNS, timeout.
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("API error (status {status}): {detail}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body, as returned by the service.
        detail: String,
    },

    /// A 2xx response body that could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Convenience type alias for exa-fetch results.
pub type Result<T> = std::result::Result<T, FetchError>;
