//! # pc-cli
//!
//! Command-line entry point of pam-crowd.
//!
//! This crate provides:
//! - Argument parsing (flags with environment fallbacks)
//! - Optional TOML configuration file
//! - Logging setup (stderr only)
//! - The whole run as [`exit_status`], from argument list to exit status
//!
//! The `pam-crowd` binary reads `username password` from stdin and exits
//! with 0 (allowed), 1 (denied), 2 (no match) or 3 (error).

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use app::exit_status;
pub use cli::Cli;
pub use config::{FileConfig, Settings};
pub use error::{CliError, CliResult};
