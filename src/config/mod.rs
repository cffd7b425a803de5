//! Command-line resolution for jmake.
//!
//! This module provides:
//! - The option registry ([`Opt`])
//! - The argument tokenizer ([`tokenize`], [`RawArgs`])
//! - The option resolver producing a [`RuntimeConfig`]
//! - Help and version rendering
//! - Default values ([`defaults`])
//!
//! # Pipeline
//!
//! ```text
//! argv → tokenize → RawArgs → resolve → RuntimeConfig
//!                      ↘ DiagnosticLog ↙
//! ```
//!
//! Everything after tokenization is infallible: bad values degrade to
//! defaults and leave a diagnostic entry for the single flush at the end.
//!
//! # Precedence
//!
//! Repeated scalar options are **first valid wins**, not last wins: the
//! values are tried in command-line order and the first one that validates
//! is used. Repeated `-o`/`-n` options are merged instead.
//!
//! # `-n` Semantics
//!
//! `-n` with files fills [`RuntimeConfig::assume_new`]; `-n` without files
//! sets [`RuntimeConfig::assume_all_new`]; no `-n` leaves both at their
//! defaults.

mod cli;
pub mod defaults;
mod error;
mod help;
mod option;
mod resolve;
mod runtime;

#[cfg(test)]
mod resolve_tests;

pub use cli::{RawArgs, Tokenized, tokenize};
pub use error::ConfigError;
pub use help::{command, help_text, version_text};
pub use option::{Arity, Opt, looks_like_option};
pub use runtime::{Invocation, RuntimeConfig};
