//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required setting was given neither as flag, env var nor in the file.
    #[error("missing required setting: {flag} (or {env})")]
    MissingSetting {
        /// Command-line flag.
        flag: &'static str,
        /// Environment variable.
        env: &'static str,
    },

    /// A setting has an unusable value.
    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::FileConfig`].
    #[error("failed to parse config file {}: {message}", path.display())]
    ConfigParse {
        /// File path.
        path: PathBuf,
        /// Parser message, without the offending source line.
        message: String,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
