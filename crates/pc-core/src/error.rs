//! Error types for the decision pipeline.
//!
//! ## Security Note
//!
//! None of these errors carry the credential line or any part of it.
//! Their `Display` output is safe to log.

use thiserror::Error;

/// Errors produced while reading the credential line.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The input stream ended before any byte was read.
    #[error("credential input is empty")]
    Empty,

    /// The line did not split into exactly two space-separated tokens.
    #[error("expected 2 space-separated tokens, found {0}")]
    TokenCount(usize),

    /// Reading the stream failed (includes non-UTF-8 input).
    #[error("failed to read credential input: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for credential reading.
pub type ReadResult<T> = Result<T, ReadError>;

/// Errors reported by a directory client through [`crate::AuthenticationPort`].
///
/// The two variants separate "could not even ask" from "asked and was
/// told no". Only [`PortError::Service`] can ever classify as a denial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    /// The client could not be built, the service was unreachable, or the
    /// response could not be understood.
    #[error("directory unavailable: {0}")]
    Unavailable(String),

    /// The directory answered with a failure reason code.
    #[error("directory reported {0}")]
    Service(String),
}

impl PortError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Creates a service error carrying the directory's reason code.
    #[must_use]
    pub fn service(code: impl Into<String>) -> Self {
        Self::Service(code.into())
    }

    /// Returns the directory reason code, if the directory answered.
    #[must_use]
    pub fn reason_code(&self) -> Option<&str> {
        match self {
            Self::Service(code) => Some(code),
            Self::Unavailable(_) => None,
        }
    }
}

/// Result type for directory client calls.
pub type PortResult<T> = Result<T, PortError>;
