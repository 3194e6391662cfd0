//! Error types for the data layer

use thiserror::Error;

/// Errors surfaced by the API client
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never completed: DNS, connection refused, timeout.
    /// Logged with its endpoint, propagated, never retried automatically.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered outside 200-299. `detail` is the best-effort
    /// JSON parse of the response body; a body that fails to parse yields
    /// `None` and never masks the status error itself.
    #[error("API error: HTTP {status}")]
    Status {
        status: u16,
        detail: Option<serde_json::Value>,
    },

    /// A 2xx response whose body did not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for data layer operations
pub type Result<T> = std::result::Result<T, ApiError>;
