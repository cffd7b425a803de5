//! Application startup and utilities.
//!
//! This module contains exit codes and tracing setup that support the
//! main entry point.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV: &str = "JMAKE_LOG";

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0), also used for help and version.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Failure to write flushed diagnostics (exit code 1).
    pub const OUTPUT_ERROR: ExitCode = ExitCode::FAILURE;

    /// Malformed command line (exit code 255, i.e. -1).
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn usage_error() -> ExitCode {
        ExitCode::from(255)
    }
}

/// Sets up the tracing subscriber for internal logging.
///
/// Writes to stderr so it never interleaves with flushed diagnostics.
pub fn setup_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
