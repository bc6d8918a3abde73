//! The four-way result of an authentication attempt.

use std::fmt;

/// Result of one authentication attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The directory confirmed the credentials.
    Allowed,
    /// The directory rejected the credentials for a recognized reason.
    Denied,
    /// No matching identity. Reserved; the classifier never produces it.
    NoMatch,
    /// Malformed input, unreachable directory, or an unrecognized failure.
    SystemError,
}

impl Outcome {
    /// Returns a short lowercase label for logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::Denied => "denied",
            Self::NoMatch => "no_match",
            Self::SystemError => "error",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
