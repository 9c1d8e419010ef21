//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a status other than the expected one
    #[error("unexpected status {status} with error code {code:?} and message {message:?}")]
    Provider {
        status: u16,
        code: String,
        message: String,
    },

    /// Success status but the body did not match the expected shape
    #[error("decode response with status {status}: {message}")]
    Protocol { status: u16, message: String },

    /// Base URL and path could not be combined into a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// API key or version is not a legal header value
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the failure was a client-side timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Http(e) if e.is_timeout())
    }

    /// Provider status code, when the provider answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Provider { status, .. } | ClientError::Protocol { status, .. } => {
                Some(*status)
            }
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
