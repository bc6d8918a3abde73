//! [`AuthenticationPort`] backed by Crowd.

use std::time::Duration;

use async_trait::async_trait;
use pc_core::{AuthenticationPort, Configuration, Credentials, PortResult};

use crate::client::CrowdClient;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticates users against the Crowd server named in the
/// [`Configuration`].
///
/// A new [`CrowdClient`] is built for every call, so a bad URL surfaces as
/// [`pc_core::PortError::Unavailable`] from `authenticate`.
#[derive(Debug, Clone, Copy)]
pub struct CrowdAuthenticator {
    timeout: Duration,
}

impl CrowdAuthenticator {
    /// Creates an authenticator whose requests give up after `timeout`.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for CrowdAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl AuthenticationPort for CrowdAuthenticator {
    async fn authenticate(
        &self,
        credentials: &Credentials,
        config: &Configuration,
    ) -> PortResult<()> {
        let client = CrowdClient::from_config(config, self.timeout)?;
        let user = client
            .authenticate(credentials.username(), credentials.password())
            .await?;

        tracing::debug!(active = user.active, "Crowd confirmed credentials");
        Ok(())
    }
}
