//! Classification of directory results.

use crate::denial::DenialReason;
use crate::error::PortResult;
use crate::outcome::Outcome;

/// Maps a directory result to an [`Outcome`].
///
/// - success is [`Outcome::Allowed`]
/// - a recognized reason code is [`Outcome::Denied`]
/// - an unknown reason code, or any unavailability, is [`Outcome::SystemError`]
///
/// Never returns [`Outcome::NoMatch`].
#[must_use]
pub fn classify(result: &PortResult<()>) -> Outcome {
    match result {
        Ok(()) => Outcome::Allowed,
        Err(err) => match err.reason_code().and_then(DenialReason::from_code) {
            Some(_) => Outcome::Denied,
            None => Outcome::SystemError,
        },
    }
}
