//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Authenticate a user against Atlassian Crowd.
///
/// Reads `<username> <password>` from stdin. Exit status: 0 allowed,
/// 1 denied, 2 no match, 3 error.
#[derive(Parser)]
#[command(name = "pam-crowd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL to the Crowd server (e.g. https://crowd.example.com/crowd).
    #[arg(long = "crowd", env = "PAM_CROWD_URL", value_name = "URL")]
    pub crowd_url: Option<String>,

    /// Application name in Crowd.
    #[arg(long, env = "PAM_CROWD_APP_NAME", value_name = "NAME")]
    pub app_name: Option<String>,

    /// Password for the application in Crowd.
    #[arg(
        long,
        env = "PAM_CROWD_APP_PASSWORD",
        value_name = "SECRET",
        hide_env_values = true
    )]
    pub app_password: Option<String>,

    /// TOML file providing defaults for the settings above.
    #[arg(short, long, env = "PAM_CROWD_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(
        long,
        env = "PAM_CROWD_TIMEOUT",
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// Log debug diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
