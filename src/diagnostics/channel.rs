//! Diagnostic channels.

use std::fmt;

/// A diagnostic channel.
///
/// Declaration order is the flush order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    /// Informational fallbacks and internal state; off unless `-D`.
    Debug,
    /// Messages about build targets; always on.
    Target,
    /// Recipe echo; on unless disabled by configuration.
    Recipe,
    /// Probable user errors that were recovered from; off with `-w`.
    Warning,
    /// Errors; always on.
    Error,
}

impl Channel {
    /// All channels in flush order.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Target,
        Self::Recipe,
        Self::Warning,
        Self::Error,
    ];

    /// Header line printed above the channel's entries, if any.
    #[must_use]
    pub const fn header(self) -> Option<&'static str> {
        match self {
            Self::Debug => Some("--DEBUG--"),
            Self::Warning => Some("--WARNING--"),
            Self::Error => Some("--ERROR--"),
            Self::Target | Self::Recipe => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "debug",
            Self::Target => "target",
            Self::Recipe => "recipe",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}
