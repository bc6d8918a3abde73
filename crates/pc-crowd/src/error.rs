//! Crowd client error types.
//!
//! ## Security Note
//!
//! Error messages must not leak credentials. Request URLs carry the
//! username as a query parameter, so they are stripped from every
//! `reqwest` error before it is stored.

use pc_core::PortError;
use thiserror::Error;

/// Errors from the Crowd client.
#[derive(Debug, Error)]
pub enum CrowdError {
    /// The configured base URL is unusable.
    #[error("invalid Crowd URL: {0}")]
    InvalidUrl(String),

    /// Crowd answered with an error reason code.
    #[error("Crowd rejected authentication ({status}): {reason}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Crowd reason code, e.g. `INVALID_USER_AUTHENTICATION`.
        reason: String,
    },

    /// Crowd answered with an error status and no reason code.
    #[error("Crowd API error: HTTP {status}")]
    Api {
        /// HTTP status code.
        status: u16,
    },

    /// A successful response could not be decoded.
    #[error("failed to decode Crowd response: {0}")]
    Decode(String),

    /// Building the HTTP client or performing the request failed.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
}

impl CrowdError {
    /// Creates an HTTP error with the request URL removed.
    #[must_use]
    pub fn http(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }

    /// Creates an invalid URL error.
    #[must_use]
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }
}

/// Result type for Crowd operations.
pub type CrowdResult<T> = Result<T, CrowdError>;

impl From<CrowdError> for PortError {
    fn from(err: CrowdError) -> Self {
        match err {
            CrowdError::Rejected { reason, .. } => PortError::Service(reason),
            other => PortError::Unavailable(other.to_string()),
        }
    }
}
