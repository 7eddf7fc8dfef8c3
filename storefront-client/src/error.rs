//! Client error types

use thiserror::Error;

/// Client error type
///
/// Transport failures and remote rejections share one taxonomy; the
/// engine recovers from both the same way (no local mutation, retry is
/// up to the operator).
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network unreachable, timeout, bad body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
