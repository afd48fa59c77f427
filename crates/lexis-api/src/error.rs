//! API client error types.

use lexis_config::ConfigError;
use lexis_core::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the Lexis backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Server-provided message, raw body, or status reason.
        message: String,
    },

    /// The response body was not the JSON shape we expected.
    #[error("decode error: {0}")]
    Decode(String),

    /// The response decoded but is structurally invalid.
    #[error("invalid response: {0}")]
    InvalidResponse(#[from] CoreError),

    /// Rejected locally before any request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Whether another attempt could plausibly succeed.
    ///
    /// Transport failures and 5xx responses are retried. Client errors (4xx),
    /// local validation failures and malformed responses are not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => !(e.is_builder() || e.is_decode() || e.is_redirect()),
            Self::Status { status, .. } => *status >= 500,
            Self::Decode(_) | Self::InvalidResponse(_) | Self::InvalidInput(_) | Self::Config(_) => {
                false
            }
        }
    }

    /// Whether this is a 4xx response from the backend.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status >= 400 && *status < 500)
    }

    /// HTTP status code, if the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
