//! The whole run of the `pam-crowd` binary, from argument list to exit
//! status.
//!
//! Startup failures (bad arguments, `--help`, `--version`, missing or
//! invalid settings) exit with [`EXIT_ERROR`] before stdin is read or the
//! directory is contacted.

use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use pc_core::{exit::EXIT_ERROR, AuthenticationPort, Outcome};

use crate::cli::Cli;
use crate::config::Settings;
use crate::logging;

/// Runs one authentication attempt and returns the process exit status.
///
/// `diagnostics` receives clap's usage, help and version text. `connect`
/// builds the directory client from the resolved request timeout; it is
/// only called once the settings are valid.
pub async fn exit_status<I, T, R, W, F, P>(
    args: I,
    input: R,
    mut diagnostics: W,
    connect: F,
) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: BufRead,
    W: Write,
    F: FnOnce(Duration) -> P,
    P: AuthenticationPort,
{
    // Help and version requests also exit 3: status 0 means "allowed" only.
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = write!(diagnostics, "{e}");
            return EXIT_ERROR;
        }
    };

    logging::init(cli.verbose);

    match authenticate(cli, input, connect).await {
        Ok(outcome) => outcome.exit_status(),
        Err(e) => {
            tracing::error!("{e:#}");
            EXIT_ERROR
        }
    }
}

async fn authenticate<R, F, P>(cli: Cli, input: R, connect: F) -> anyhow::Result<Outcome>
where
    R: BufRead,
    F: FnOnce(Duration) -> P,
    P: AuthenticationPort,
{
    let settings = Settings::resolve(cli).context("invalid configuration")?;
    let port = connect(settings.timeout);

    let outcome = pc_core::run(input, &settings.configuration, &port).await;
    tracing::debug!(outcome = %outcome, status = outcome.exit_status(), "Authentication finished");

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pc_core::exit::{EXIT_ALLOWED, EXIT_DENIED};
    use pc_core::{Configuration, Credentials, PortError, PortResult};
    use secrecy::ExposeSecret;
    use std::io::{self, Read};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Accepts `alice`/`secret123` and counts its calls.
    struct CountingPort {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl AuthenticationPort for CountingPort {
        async fn authenticate(
            &self,
            credentials: &Credentials,
            _config: &Configuration,
        ) -> PortResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if credentials.username() == "alice"
                && credentials.password().expose_secret() == "secret123"
            {
                Ok(())
            } else {
                Err(PortError::service("INVALID_USER_AUTHENTICATION"))
            }
        }
    }

    /// Serves `line` and counts how often it was asked for data.
    struct TrackedInput {
        line: io::Cursor<Vec<u8>>,
        reads: usize,
    }

    impl TrackedInput {
        fn new(line: &str) -> Self {
            Self {
                line: io::Cursor::new(line.as_bytes().to_vec()),
                reads: 0,
            }
        }
    }

    impl Read for TrackedInput {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.reads += 1;
            self.line.read(buf)
        }
    }

    impl BufRead for TrackedInput {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            self.reads += 1;
            self.line.fill_buf()
        }

        fn consume(&mut self, amt: usize) {
            self.line.consume(amt);
        }
    }

    struct Run {
        status: u8,
        calls: usize,
        reads: usize,
        diagnostics: String,
    }

    async fn run_with(args: &[&str], line: &str) -> Run {
        let mut argv = vec!["pam-crowd"];
        argv.extend_from_slice(args);

        let calls = Arc::new(AtomicUsize::new(0));
        let port_calls = Arc::clone(&calls);
        let mut input = TrackedInput::new(line);
        let mut diagnostics: Vec<u8> = Vec::new();

        let status = exit_status(argv, &mut input, &mut diagnostics, move |_timeout| {
            CountingPort { calls: port_calls }
        })
        .await;

        Run {
            status,
            calls: calls.load(Ordering::SeqCst),
            reads: input.reads,
            diagnostics: String::from_utf8_lossy(&diagnostics).into_owned(),
        }
    }

    const SETTINGS: [&str; 6] = [
        "--crowd",
        "https://crowd.example.com/crowd",
        "--app-name",
        "pam",
        "--app-password",
        "app-secret",
    ];

    #[tokio::test]
    async fn help_exits_with_error_status() {
        let run = run_with(&["--help"], "alice secret123\n").await;

        assert_eq!(run.status, EXIT_ERROR);
        assert_eq!(run.calls, 0);
        assert_eq!(run.reads, 0);
        assert!(run.diagnostics.contains("--app-password"));
    }

    #[tokio::test]
    async fn version_exits_with_error_status() {
        let run = run_with(&["--version"], "alice secret123\n").await;

        assert_eq!(run.status, EXIT_ERROR);
        assert_eq!(run.calls, 0);
        assert_eq!(run.reads, 0);
        assert!(run.diagnostics.contains(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn unknown_flag_exits_with_error_status() {
        let run = run_with(&["--bogus"], "alice secret123\n").await;

        assert_eq!(run.status, EXIT_ERROR);
        assert_eq!(run.calls, 0);
        assert_eq!(run.reads, 0);
        assert!(run.diagnostics.contains("--bogus"));
    }

    #[tokio::test]
    async fn missing_setting_stops_before_input() {
        let run = run_with(&SETTINGS[..4], "alice secret123\n").await;

        assert_eq!(run.status, EXIT_ERROR);
        assert_eq!(run.calls, 0);
        assert_eq!(run.reads, 0);
    }

    #[tokio::test]
    async fn empty_setting_stops_before_input() {
        let mut args = SETTINGS;
        args[5] = "";
        let run = run_with(&args, "alice secret123\n").await;

        assert_eq!(run.status, EXIT_ERROR);
        assert_eq!(run.calls, 0);
        assert_eq!(run.reads, 0);
    }

    #[tokio::test]
    async fn valid_settings_run_one_attempt() {
        let run = run_with(&SETTINGS, "alice secret123\n").await;
        assert_eq!(run.status, EXIT_ALLOWED);
        assert_eq!(run.calls, 1);
        assert!(run.reads > 0);
        assert!(run.diagnostics.is_empty());

        let run = run_with(&SETTINGS, "alice wrong\n").await;
        assert_eq!(run.status, EXIT_DENIED);
        assert_eq!(run.calls, 1);
    }

    #[tokio::test]
    async fn malformed_input_skips_directory() {
        let run = run_with(&SETTINGS, "alice\n").await;

        assert_eq!(run.status, EXIT_ERROR);
        assert_eq!(run.calls, 0);
    }
}
