//! Buffered, multi-channel diagnostic log.
//!
//! Diagnostics are collected while the command line is being resolved and
//! emitted once at the end, because the final destination (console or log
//! file) is itself one of the things being resolved.
//!
//! # Flush Order
//!
//! [`DiagnosticLog::flush`] writes the channels in a fixed order, each only
//! when it is enabled and non-empty:
//!
//! 1. debug (under a `--DEBUG--` header)
//! 2. target
//! 3. recipe
//! 4. warning (under a `--WARNING--` header)
//! 5. error (under a `--ERROR--` header)
//!
//! All buffers are cleared afterwards, including the gated-off ones.

mod channel;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use channel::Channel;

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by the diagnostic log's output side.
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// The requested log file could not be created.
    #[error("Failed to open log file '{}': {source}", path.display())]
    OpenDestination {
        /// Path that was requested as destination
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing flushed diagnostics failed.
    #[error("Failed to write diagnostics: {0}")]
    Write(#[source] io::Error),
}

/// Where flushed diagnostics end up.
#[derive(Debug)]
enum Destination {
    Stdout,
    File { path: PathBuf, file: File },
}

/// One channel's gate plus its pending entries.
#[derive(Debug, Clone)]
struct Buffer {
    enabled: bool,
    entries: Vec<String>,
}

impl Buffer {
    const fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: Vec::new(),
        }
    }
}

/// Five-channel diagnostic sink with deferred, ordered flushing.
///
/// Each resolution owns its own log; there is no process-wide instance.
///
/// # Example
///
/// ```
/// use jmake::diagnostics::{Channel, DiagnosticLog};
///
/// let mut log = DiagnosticLog::new();
/// log.append(Channel::Warning, "first")
///     .append(Channel::Error, "second");
///
/// let mut out = Vec::new();
/// log.flush_to(&mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "--WARNING--\nfirst\n--ERROR--\nsecond\n"
/// );
/// assert!(log.is_empty());
/// ```
#[derive(Debug)]
pub struct DiagnosticLog {
    debug: Buffer,
    target: Buffer,
    recipe: Buffer,
    warning: Buffer,
    error: Buffer,
    destination: Destination,
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticLog {
    /// Creates an empty log writing to stdout.
    ///
    /// Debug is off; target, recipe, warning and error are on.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            debug: Buffer::new(false),
            target: Buffer::new(true),
            recipe: Buffer::new(true),
            warning: Buffer::new(true),
            error: Buffer::new(true),
            destination: Destination::Stdout,
        }
    }

    /// Sets the gates of the configurable channels.
    ///
    /// Target and error are always enabled.
    pub const fn configure(&mut self, debug: bool, recipe: bool, warnings: bool) {
        self.debug.enabled = debug;
        self.recipe.enabled = recipe;
        self.warning.enabled = warnings;
    }

    /// Redirects future flushes to `path`, truncating it.
    ///
    /// # Errors
    ///
    /// Returns [`DiagnosticError::OpenDestination`] if the file cannot be
    /// created. The previous destination is kept in that case.
    pub fn set_destination(&mut self, path: &Path) -> Result<(), DiagnosticError> {
        let file = File::create(path).map_err(|source| DiagnosticError::OpenDestination {
            path: path.to_path_buf(),
            source,
        })?;
        self.destination = Destination::File {
            path: path.to_path_buf(),
            file,
        };
        Ok(())
    }

    /// Returns the log file path, or `None` when writing to stdout.
    #[must_use]
    pub fn destination(&self) -> Option<&Path> {
        match &self.destination {
            Destination::Stdout => None,
            Destination::File { path, .. } => Some(path),
        }
    }

    /// Appends an entry to a channel, regardless of its gate.
    pub fn append(&mut self, channel: Channel, text: impl Into<String>) -> &mut Self {
        self.buffer_mut(channel).entries.push(text.into());
        self
    }

    /// Returns the pending entries of a channel.
    #[must_use]
    pub fn entries(&self, channel: Channel) -> &[String] {
        &self.buffer(channel).entries
    }

    /// Returns `true` if the channel's gate is open.
    #[must_use]
    pub const fn is_enabled(&self, channel: Channel) -> bool {
        self.buffer(channel).enabled
    }

    /// Returns `true` if no channel holds pending entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Channel::ALL
            .iter()
            .all(|&channel| self.buffer(channel).entries.is_empty())
    }

    /// Renders what a flush would print right now, without clearing.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for channel in Channel::ALL {
            let buffer = self.buffer(channel);
            if !buffer.enabled || buffer.entries.is_empty() {
                continue;
            }
            if let Some(header) = channel.header() {
                out.push_str(header);
                out.push('\n');
            }
            for entry in &buffer.entries {
                out.push_str(entry);
                out.push('\n');
            }
        }
        out
    }

    /// Writes the rendered channels to `out` and clears every buffer.
    ///
    /// Buffers are cleared even when writing fails.
    ///
    /// # Errors
    ///
    /// Returns [`DiagnosticError::Write`] if writing to `out` fails.
    pub fn flush_to<W: Write>(&mut self, out: &mut W) -> Result<(), DiagnosticError> {
        let rendered = self.render();
        self.clear();
        out.write_all(rendered.as_bytes())
            .and_then(|()| out.flush())
            .map_err(DiagnosticError::Write)
    }

    /// Writes the rendered channels to the configured destination and
    /// clears every buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DiagnosticError::Write`] if the destination rejects the write.
    pub fn flush(&mut self) -> Result<(), DiagnosticError> {
        let rendered = self.render();
        self.clear();
        let result = match &mut self.destination {
            Destination::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(rendered.as_bytes())
                    .and_then(|()| stdout.flush())
            }
            Destination::File { file, .. } => file
                .write_all(rendered.as_bytes())
                .and_then(|()| file.flush()),
        };
        result.map_err(DiagnosticError::Write)
    }

    fn clear(&mut self) {
        for channel in Channel::ALL {
            self.buffer_mut(channel).entries.clear();
        }
    }

    const fn buffer(&self, channel: Channel) -> &Buffer {
        match channel {
            Channel::Debug => &self.debug,
            Channel::Target => &self.target,
            Channel::Recipe => &self.recipe,
            Channel::Warning => &self.warning,
            Channel::Error => &self.error,
        }
    }

    const fn buffer_mut(&mut self, channel: Channel) -> &mut Buffer {
        match channel {
            Channel::Debug => &mut self.debug,
            Channel::Target => &mut self.target,
            Channel::Recipe => &mut self.recipe,
            Channel::Warning => &mut self.warning,
            Channel::Error => &mut self.error,
        }
    }
}
