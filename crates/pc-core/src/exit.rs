//! Mapping from [`Outcome`] to the process exit status.
//!
//! These values are the interface with the calling PAM module and must
//! never change. Callers treat any other status as an error.

use crate::outcome::Outcome;

/// Exit status for [`Outcome::Allowed`].
pub const EXIT_ALLOWED: u8 = 0;
/// Exit status for [`Outcome::Denied`].
pub const EXIT_DENIED: u8 = 1;
/// Exit status for [`Outcome::NoMatch`].
pub const EXIT_NO_MATCH: u8 = 2;
/// Exit status for [`Outcome::SystemError`].
pub const EXIT_ERROR: u8 = 3;

impl Outcome {
    /// Returns the process exit status for this outcome.
    #[must_use]
    pub const fn exit_status(self) -> u8 {
        match self {
            Self::Allowed => EXIT_ALLOWED,
            Self::Denied => EXIT_DENIED,
            Self::NoMatch => EXIT_NO_MATCH,
            Self::SystemError => EXIT_ERROR,
        }
    }
}
