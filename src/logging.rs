//! Diagnostic logging via `tracing`.
//!
//! Filter comes from `SEEDPASS_LOG` (EnvFilter syntax), default `warn`.
//! Output goes to stderr so stdout carries only passwords.

use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "SEEDPASS_LOG";

/// Install the global subscriber. Quiet mode turns logging off entirely.
/// A second call is a no-op.
pub fn init(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
