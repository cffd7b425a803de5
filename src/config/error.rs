//! Error types for command-line resolution.

use thiserror::Error;

/// Error type for command-line resolution.
///
/// Only conditions that leave no usable configuration are errors; every
/// other problem degrades to a default plus a diagnostic entry.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value-bearing option was the last token.
    #[error("Option {option} doesn't have value")]
    MissingValue {
        /// The option token as written
        option: String,
    },

    /// The process working directory could not be determined.
    #[error("Failed to determine current directory: {source}")]
    CurrentDir {
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Creates a `MissingValue` error for the given option token.
    #[must_use]
    pub fn missing_value(option: impl Into<String>) -> Self {
        Self::MissingValue {
            option: option.into(),
        }
    }
}
