//! Directory client port.
//!
//! Concrete directory clients (see `pc-crowd`) implement
//! [`AuthenticationPort`]. The orchestrator only ever talks to this trait.

use async_trait::async_trait;

use crate::config::Configuration;
use crate::credentials::Credentials;
use crate::error::PortResult;

/// Checks a credential pair against an identity directory.
///
/// ## Implementation Notes
///
/// - Build any connection state from `config` inside the call; failures to
///   do so are [`crate::PortError::Unavailable`].
/// - Report directory-side rejections as [`crate::PortError::Service`]
///   with the directory's reason code, unmodified.
/// - Never log or store the password. Do not retry.
#[async_trait]
pub trait AuthenticationPort: Send + Sync {
    /// Authenticates `credentials` once. `Ok(())` means the directory
    /// confirmed the pair.
    async fn authenticate(
        &self,
        credentials: &Credentials,
        config: &Configuration,
    ) -> PortResult<()>;
}
