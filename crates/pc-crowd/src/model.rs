//! Crowd REST payloads.

use serde::{Deserialize, Serialize};

/// Request body of `POST /authentication`.
#[derive(Serialize)]
pub(crate) struct PasswordBody<'a> {
    pub value: &'a str,
}

/// Error body Crowd returns with non-2xx responses.
///
/// Crowd also sends a free-text `message`; it is ignored because it often
/// repeats the username.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub reason: String,
}

/// The user Crowd returns after a successful authentication.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CrowdUser {
    /// Username.
    pub name: String,
    /// Whether the account is active.
    #[serde(default)]
    pub active: bool,
    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
}
