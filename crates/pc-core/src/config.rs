//! Directory connection settings.

use secrecy::SecretString;

/// Settings needed to talk to the identity directory.
///
/// Built once at startup and passed by reference to the orchestrator.
/// The application secret is redacted in `Debug` output.
#[derive(Debug)]
pub struct Configuration {
    service_url: String,
    application_name: String,
    application_secret: SecretString,
}

impl Configuration {
    /// Creates a configuration.
    #[must_use]
    pub fn new(
        service_url: impl Into<String>,
        application_name: impl Into<String>,
        application_secret: impl Into<String>,
    ) -> Self {
        Self {
            service_url: service_url.into(),
            application_name: application_name.into(),
            application_secret: SecretString::from(application_secret.into()),
        }
    }

    /// Base URL of the directory service.
    #[must_use]
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Name this application is registered under in the directory.
    #[must_use]
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// Secret this application authenticates to the directory with.
    #[must_use]
    pub const fn application_secret(&self) -> &SecretString {
        &self.application_secret
    }
}
