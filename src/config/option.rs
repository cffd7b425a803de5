//! Registry of recognized command-line options.
//!
//! [`Opt`] is the single source of truth shared by the tokenizer, the
//! resolver and the help renderer.

use std::fmt;

/// Whether an option takes a value token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Boolean flag, never consumes a token.
    Flag,
    /// Always consumes the next token, even one that looks like an option.
    Required,
    /// Consumes the next token only when it does not look like an option.
    Optional,
}

/// A recognized command-line option.
///
/// Value-bearing options come first; the declaration order is also the
/// iteration order of raw-value maps keyed by `Opt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Opt {
    /// `-d`, `--directory`
    Directory,
    /// `-f`, `--makefile`
    Makefile,
    /// `-g`, `--git-branch`
    GitBranch,
    /// `-j`, `--jobs-num`
    Jobs,
    /// `-o`, `--assume-old`
    AssumeOld,
    /// `-n`, `--assume-new`
    AssumeNew,
    /// `-s`, `--shell`
    Shell,
    /// `-e`, `--environ`
    Environ,
    /// `-l`, `--logfile`
    Logfile,
    /// `-a`, `--make-all`
    MakeAll,
    /// `-q`, `--query-targets`
    QueryTargets,
    /// `-r`, `--echo-recipes`
    EchoRecipes,
    /// `-w`, `--no-warnings`
    NoWarnings,
    /// `-D`
    Debug,
    /// `-h`, `--help`
    Help,
    /// `-v`, `--version`
    Version,
}

impl Opt {
    /// Every option, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Directory,
        Self::Makefile,
        Self::GitBranch,
        Self::Jobs,
        Self::AssumeOld,
        Self::AssumeNew,
        Self::Shell,
        Self::Environ,
        Self::Logfile,
        Self::MakeAll,
        Self::QueryTargets,
        Self::EchoRecipes,
        Self::NoWarnings,
        Self::Debug,
        Self::Help,
        Self::Version,
    ];

    /// Looks up the option a marker token names.
    #[must_use]
    pub fn lookup(token: &str) -> Option<Self> {
        if let Some(long) = token.strip_prefix("--") {
            return Self::ALL.into_iter().find(|opt| opt.long() == Some(long));
        }

        let mut chars = token.strip_prefix('-')?.chars();
        let (Some(short), None) = (chars.next(), chars.next()) else {
            return None;
        };
        Self::ALL.into_iter().find(|opt| opt.short() == short)
    }

    /// Single-character form, written after `-`.
    #[must_use]
    pub const fn short(self) -> char {
        match self {
            Self::Directory => 'd',
            Self::Makefile => 'f',
            Self::GitBranch => 'g',
            Self::Jobs => 'j',
            Self::AssumeOld => 'o',
            Self::AssumeNew => 'n',
            Self::Shell => 's',
            Self::Environ => 'e',
            Self::Logfile => 'l',
            Self::MakeAll => 'a',
            Self::QueryTargets => 'q',
            Self::EchoRecipes => 'r',
            Self::NoWarnings => 'w',
            Self::Debug => 'D',
            Self::Help => 'h',
            Self::Version => 'v',
        }
    }

    /// Long form, written after `--`.
    #[must_use]
    pub const fn long(self) -> Option<&'static str> {
        match self {
            Self::Directory => Some("directory"),
            Self::Makefile => Some("makefile"),
            Self::GitBranch => Some("git-branch"),
            Self::Jobs => Some("jobs-num"),
            Self::AssumeOld => Some("assume-old"),
            Self::AssumeNew => Some("assume-new"),
            Self::Shell => Some("shell"),
            Self::Environ => Some("environ"),
            Self::Logfile => Some("logfile"),
            Self::MakeAll => Some("make-all"),
            Self::QueryTargets => Some("query-targets"),
            Self::EchoRecipes => Some("echo-recipes"),
            Self::NoWarnings => Some("no-warnings"),
            Self::Debug => None,
            Self::Help => Some("help"),
            Self::Version => Some("version"),
        }
    }

    /// Whether the option takes a value token.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Directory
            | Self::Makefile
            | Self::GitBranch
            | Self::Jobs
            | Self::AssumeOld
            | Self::Shell
            | Self::Environ => Arity::Required,
            Self::AssumeNew | Self::Logfile => Arity::Optional,
            Self::MakeAll
            | Self::QueryTargets
            | Self::EchoRecipes
            | Self::NoWarnings
            | Self::Debug
            | Self::Help
            | Self::Version => Arity::Flag,
        }
    }

    /// Returns `true` for options that take a value token.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        !matches!(self.arity(), Arity::Flag)
    }

    /// Returns `true` for options that stop the pipeline (help, version).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Help | Self::Version)
    }

    /// Placeholder shown for the value in help output.
    #[must_use]
    pub const fn value_name(self) -> Option<&'static str> {
        match self {
            Self::Directory => Some("DIR"),
            Self::Makefile | Self::Logfile => Some("FILE"),
            Self::GitBranch => Some("BRANCH"),
            Self::Jobs => Some("N"),
            Self::AssumeOld | Self::AssumeNew => Some("FILES"),
            Self::Shell => Some("SHELL"),
            Self::Environ => Some("KEY=VAL,..."),
            _ => None,
        }
    }

    /// One-line description for help output.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Directory => "Specify working directory",
            Self::Makefile => "Read FILE as Makefile, relative to the working directory",
            Self::GitBranch => "Specify what git branch to use",
            Self::Jobs => "Run N jobs at once",
            Self::AssumeOld => "Comma-separated files to treat as unchanged",
            Self::AssumeNew => {
                "Comma-separated files to treat as freshly modified; all touched files if empty"
            }
            Self::Shell => "Shell used to run recipes",
            Self::Environ => "Comma-separated KEY=VAL environment assignments",
            Self::Logfile => "Write diagnostics to FILE instead of standard output",
            Self::MakeAll => "Make all targets",
            Self::QueryTargets => "Only report which targets would be made",
            Self::EchoRecipes => "Echo recipes as they run",
            Self::NoWarnings => "Suppress warnings",
            Self::Debug => "Print debug diagnostics",
            Self::Help => "Print this message and exit",
            Self::Version => "Print version and exit",
        }
    }
}

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.long() {
            Some(long) => write!(f, "-{}/--{long}", self.short()),
            None => write!(f, "-{}", self.short()),
        }
    }
}

/// Returns `true` if `token` should be read as an option marker.
///
/// A lone `-` is not a marker, and neither is a negative number.
#[must_use]
pub fn looks_like_option(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('-') && chars.next().is_some_and(|c| !c.is_ascii_digit())
}
