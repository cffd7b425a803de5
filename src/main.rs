//! JMake: front-end of the jmake build tool.
//!
//! Entry point for the jmake application.

use jmake::config::{Invocation, RuntimeConfig};
use jmake::diagnostics::{Channel, DiagnosticLog};
use std::ffi::OsString;
use std::process::ExitCode;

mod app;

use app::{exit_code, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let args = collect_args(std::env::args_os().skip(1));
    setup_tracing(args.iter().any(|arg| arg == "-D"));

    let mut log = DiagnosticLog::new();
    let config = match RuntimeConfig::resolve(args.as_slice(), &mut log) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help(text) | Invocation::Version(text)) => {
            print!("{text}");
            return exit_code::SUCCESS;
        }
        Err(e) => {
            eprintln!("{e}");
            return exit_code::usage_error();
        }
    };

    log.append(Channel::Debug, config.to_string());
    tracing::debug!(targets = ?config.targets, "configuration ready");

    match log.flush() {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::OUTPUT_ERROR
        }
    }
}

/// Converts raw arguments to text, replacing invalid UTF-8 sequences.
fn collect_args(args: impl Iterator<Item = OsString>) -> Vec<String> {
    args.map(|arg| arg.to_string_lossy().into_owned()).collect()
}
