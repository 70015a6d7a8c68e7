//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed (connection refused, timeout, broken body, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing or joining failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure reported by a non-HTTP transport.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Check if the server could not be reached at all.
    pub fn is_connect(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_connect())
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
