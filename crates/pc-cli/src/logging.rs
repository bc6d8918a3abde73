//! Logging setup.
//!
//! Diagnostics go to stderr only; stdout stays empty. `RUST_LOG` takes
//! precedence over the defaults below. Output is plain text: the calling
//! PAM module usually forwards stderr to syslog.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter used without `RUST_LOG`.
const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose` and without `RUST_LOG`. Dependencies stay
/// at `warn`: HTTP client debug output includes request URLs, which carry
/// the username.
const VERBOSE_FILTER: &str = "warn,pc_core=debug,pc_crowd=debug,pc_cli=debug,pam_crowd=debug";

/// Returns the filter directives to use when `RUST_LOG` is unset.
#[must_use]
pub const fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(std::io::stderr))
        .try_init();
}

fn fmt_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .with_ansi(false)
}
