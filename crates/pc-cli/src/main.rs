//! # pam-crowd
//!
//! Reads `<username> <password>` from stdin, authenticates against Crowd
//! and exits with 0 (allowed), 1 (denied), 2 (no match) or 3 (error).
//!
//! Launched once per attempt by a PAM module or a similar supervisor.

#![forbid(unsafe_code)]

use std::io;
use std::process::ExitCode;

use pc_crowd::CrowdAuthenticator;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let status = pc_cli::exit_status(
        std::env::args_os(),
        io::stdin().lock(),
        io::stderr(),
        CrowdAuthenticator::new,
    )
    .await;

    ExitCode::from(status)
}
