//! One authentication attempt, from credential line to [`Outcome`].

use std::io::BufRead;

use crate::classify::classify;
use crate::config::Configuration;
use crate::credentials::read_credentials;
use crate::error::PortError;
use crate::outcome::Outcome;
use crate::port::AuthenticationPort;

/// Reads the credential line from `input`, asks `port` once, and
/// classifies the answer.
///
/// Malformed input yields [`Outcome::SystemError`] without contacting the
/// directory. Nothing here exits the process; the caller maps the returned
/// outcome to an exit status.
pub async fn run<R, P>(input: R, config: &Configuration, port: &P) -> Outcome
where
    R: BufRead,
    P: AuthenticationPort + ?Sized,
{
    let credentials = match read_credentials(input) {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected credential input");
            return Outcome::SystemError;
        }
    };

    tracing::debug!(
        service_url = %config.service_url(),
        application = %config.application_name(),
        "Authenticating against directory"
    );

    let result = port.authenticate(&credentials, config).await;
    drop(credentials);

    let outcome = classify(&result);
    match &result {
        Ok(()) => tracing::info!(outcome = %outcome, "Directory accepted credentials"),
        Err(PortError::Service(code)) if outcome == Outcome::Denied => {
            tracing::info!(outcome = %outcome, reason = %code, "Directory denied credentials");
        }
        Err(PortError::Service(code)) => {
            tracing::warn!(outcome = %outcome, reason = %code, "Unrecognized directory failure");
        }
        Err(PortError::Unavailable(message)) => {
            tracing::warn!(outcome = %outcome, error = %message, "Directory unavailable");
        }
    }

    outcome
}
