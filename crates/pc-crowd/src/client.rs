//! Crowd REST client.

use std::time::Duration;

use pc_core::Configuration;
use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::{CrowdError, CrowdResult};
use crate::model::{CrowdUser, ErrorBody, PasswordBody};

/// Path of the authentication resource, relative to the Crowd base URL.
const AUTHENTICATION_PATH: &str = "rest/usermanagement/1/authentication";

/// Client for a single Crowd application.
pub struct CrowdClient {
    http: reqwest::Client,
    endpoint: Url,
    app_name: String,
    app_secret: SecretString,
}

impl CrowdClient {
    /// Creates a client for the Crowd server at `base_url`
    /// (e.g. `https://crowd.example.com/crowd`).
    ///
    /// Fails if the URL does not parse or is not `http`/`https`.
    pub fn new(
        base_url: &str,
        app_name: impl Into<String>,
        app_secret: &SecretString,
        timeout: Duration,
    ) -> CrowdResult<Self> {
        let endpoint = authentication_endpoint(base_url)?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CrowdError::http)?;

        Ok(Self {
            http,
            endpoint,
            app_name: app_name.into(),
            app_secret: SecretString::from(app_secret.expose_secret().to_owned()),
        })
    }

    /// Creates a client from the pipeline configuration.
    pub fn from_config(config: &Configuration, timeout: Duration) -> CrowdResult<Self> {
        Self::new(
            config.service_url(),
            config.application_name(),
            config.application_secret(),
            timeout,
        )
    }

    /// Returns the authentication endpoint this client posts to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Authenticates a user.
    ///
    /// Returns the Crowd user on success. A Crowd error response carrying a
    /// reason code becomes [`CrowdError::Rejected`].
    pub async fn authenticate(
        &self,
        username: &str,
        password: &SecretString,
    ) -> CrowdResult<CrowdUser> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .query(&[("username", username)])
            .basic_auth(&self.app_name, Some(self.app_secret.expose_secret()))
            .header(ACCEPT, "application/json")
            .json(&PasswordBody {
                value: password.expose_secret(),
            })
            .send()
            .await
            .map_err(CrowdError::http)?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<CrowdUser>()
                .await
                .map_err(|e| CrowdError::Decode(e.without_url().to_string()));
        }

        let body = response.bytes().await.map_err(CrowdError::http)?;
        match serde_json::from_slice::<ErrorBody>(&body) {
            Ok(error) => Err(CrowdError::Rejected {
                status: status.as_u16(),
                reason: error.reason,
            }),
            Err(_) => Err(CrowdError::Api {
                status: status.as_u16(),
            }),
        }
    }
}

/// Resolves the authentication endpoint below `base_url`.
fn authentication_endpoint(base_url: &str) -> CrowdResult<Url> {
    let mut base = Url::parse(base_url).map_err(|e| CrowdError::invalid_url(e.to_string()))?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(CrowdError::invalid_url(format!(
            "unsupported scheme '{}'",
            base.scheme()
        )));
    }

    // `join` replaces the last path segment unless the base ends in '/'.
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(AUTHENTICATION_PATH)
        .map_err(|e| CrowdError::invalid_url(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_with_context_path() {
        let url = authentication_endpoint("https://crowd.example.com/crowd").unwrap();
        assert_eq!(
            url.as_str(),
            "https://crowd.example.com/crowd/rest/usermanagement/1/authentication"
        );

        let url = authentication_endpoint("https://crowd.example.com/crowd/").unwrap();
        assert_eq!(
            url.as_str(),
            "https://crowd.example.com/crowd/rest/usermanagement/1/authentication"
        );
    }

    #[test]
    fn endpoint_at_root() {
        let url = authentication_endpoint("http://localhost:8095").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8095/rest/usermanagement/1/authentication"
        );
    }

    #[test]
    fn rejects_bad_urls() {
        assert!(matches!(
            authentication_endpoint("not a url"),
            Err(CrowdError::InvalidUrl(_))
        ));
        assert!(matches!(
            authentication_endpoint("ldaps://crowd.example.com"),
            Err(CrowdError::InvalidUrl(_))
        ));
        assert!(matches!(
            authentication_endpoint(""),
            Err(CrowdError::InvalidUrl(_))
        ));
    }

    #[test]
    fn from_config_validates_url() {
        let config = Configuration::new("crowd.example.com", "pam", "secret");
        assert!(CrowdClient::from_config(&config, Duration::from_secs(5)).is_err());

        let config = Configuration::new("https://crowd.example.com", "pam", "secret");
        let client = CrowdClient::from_config(&config, Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://crowd.example.com/rest/usermanagement/1/authentication"
        );
    }
}
