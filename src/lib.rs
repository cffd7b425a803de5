//! JMake: front-end of the jmake build tool.
//!
//! Turns a raw argument vector into a validated [`config::RuntimeConfig`]
//! and collects human-readable diagnostics along the way for a single,
//! ordered flush.

pub mod config;
pub mod diagnostics;
pub mod fs;
