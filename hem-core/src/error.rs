/// Error types for the energy backend client
use thiserror::Error;

/// Main error type for backend operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    BadStatus(u16),

    /// Response body did not have the expected shape
    #[error("Malformed response payload: {0}")]
    MalformedPayload(&'static str),
}

/// Type alias for Results using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
