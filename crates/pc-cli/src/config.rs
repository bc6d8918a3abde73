//! Settings resolution.
//!
//! Each setting is taken from the first source that provides it:
//! command-line flag, environment variable (both handled by clap), then
//! the optional TOML file. Empty values count as missing.

use std::path::Path;
use std::time::Duration;

use pc_core::Configuration;
use pc_crowd::provider::DEFAULT_TIMEOUT;
use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{CliError, CliResult};

/// Contents of the configuration file.
///
/// ```toml
/// crowd = "https://crowd.example.com/crowd"
/// app_name = "pam"
/// app_password = "s3cr3t"
/// timeout_secs = 10
/// ```
///
/// Not `Debug`: holds the application password.
#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Crowd base URL.
    pub crowd: Option<String>,
    /// Application name in Crowd.
    pub app_name: Option<String>,
    /// Application password in Crowd.
    pub app_password: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Loads a configuration file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| CliError::ConfigParse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }
}

/// Fully resolved settings for one run.
#[derive(Debug)]
pub struct Settings {
    /// Directory connection settings.
    pub configuration: Configuration,
    /// Crowd request timeout.
    pub timeout: Duration,
}

impl Settings {
    /// Resolves settings from parsed arguments and the optional file.
    pub fn resolve(cli: Cli) -> CliResult<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let crowd_url = pick(cli.crowd_url, file.crowd).ok_or(CliError::MissingSetting {
            flag: "--crowd",
            env: "PAM_CROWD_URL",
        })?;
        let app_name = pick(cli.app_name, file.app_name).ok_or(CliError::MissingSetting {
            flag: "--app-name",
            env: "PAM_CROWD_APP_NAME",
        })?;
        let app_password =
            pick(cli.app_password, file.app_password).ok_or(CliError::MissingSetting {
                flag: "--app-password",
                env: "PAM_CROWD_APP_PASSWORD",
            })?;

        let timeout = match cli.timeout.or(file.timeout_secs) {
            Some(0) => {
                return Err(CliError::InvalidSetting(
                    "timeout must be at least 1 second".to_string(),
                ))
            }
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            configuration: Configuration::new(crowd_url, app_name, app_password),
            timeout,
        })
    }
}

fn pick(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|v| !v.is_empty())
        .or_else(|| fallback.filter(|v| !v.is_empty()))
}
