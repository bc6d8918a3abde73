//! Directory reason codes that count as an authentication denial.
//!
//! Crowd reports failed authentications with a `reason` code. The codes
//! below mean the directory looked at the credentials and said no. Any
//! other code is treated as an operational error.
//!
//! `USER_NOT_FOUND` is a denial like the others. It does not produce
//! [`crate::Outcome::NoMatch`].

use std::fmt;

/// A recognized denial reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenialReason {
    /// The application may not authenticate this user.
    ApplicationAccessDenied,
    /// The user's credential has expired.
    ExpiredCredential,
    /// The account is disabled.
    InactiveAccount,
    /// Username/password combination is wrong.
    InvalidUserAuthentication,
    /// The credential is invalid.
    InvalidCredential,
    /// The email address is invalid.
    InvalidEmail,
    /// The user is invalid.
    InvalidUser,
    /// No such user in the directory.
    UserNotFound,
}

/// Every denial reason, in the directory's documentation order.
pub const DENIAL_REASONS: [DenialReason; 8] = [
    DenialReason::ApplicationAccessDenied,
    DenialReason::ExpiredCredential,
    DenialReason::InactiveAccount,
    DenialReason::InvalidUserAuthentication,
    DenialReason::InvalidCredential,
    DenialReason::InvalidEmail,
    DenialReason::InvalidUser,
    DenialReason::UserNotFound,
];

impl DenialReason {
    /// Returns the wire code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ApplicationAccessDenied => "APPLICATION_ACCESS_DENIED",
            Self::ExpiredCredential => "EXPIRED_CREDENTIAL",
            Self::InactiveAccount => "INACTIVE_ACCOUNT",
            Self::InvalidUserAuthentication => "INVALID_USER_AUTHENTICATION",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidUser => "INVALID_USER",
            Self::UserNotFound => "USER_NOT_FOUND",
        }
    }

    /// Looks up a wire code. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        DENIAL_REASONS
            .iter()
            .copied()
            .find(|reason| reason.as_str() == code)
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
