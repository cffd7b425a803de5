//! Resolved runtime configuration.
//!
//! [`RuntimeConfig`] is what the rest of the build tool consumes. It is
//! produced once by the resolver and not mutated afterwards.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::diagnostics::DiagnosticLog;

use super::cli::{Tokenized, tokenize};
use super::defaults;
use super::error::ConfigError;
use super::help;
use super::resolve::Resolver;

/// Outcome of resolving a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Proceed with this configuration.
    Run(RuntimeConfig),
    /// Print this usage text and exit successfully.
    Help(String),
    /// Print this version text and exit successfully.
    Version(String),
}

/// Fully resolved configuration.
///
/// # Invariants
///
/// - `directory` is absolute and existed at resolution time.
/// - `makefile`, `assume_old`, `assume_new` and `logfile` are absolute.
/// - `jobs` is at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct RuntimeConfig {
    /// Positional build targets, in command-line order
    pub targets: Vec<String>,

    /// Working directory
    pub directory: PathBuf,

    /// Makefile to read
    pub makefile: PathBuf,

    /// Git branch; empty means the current branch
    pub git_branch: String,

    /// Number of jobs running at once
    pub jobs: u32,

    /// Shell used to run recipes
    pub shell: String,

    /// Comma-separated `KEY=VAL` environment assignments
    pub environ: String,

    /// Files treated as unchanged
    pub assume_old: BTreeSet<PathBuf>,

    /// Files treated as freshly modified
    pub assume_new: BTreeSet<PathBuf>,

    /// Treat every touched file as freshly modified (`-n` without files)
    pub assume_all_new: bool,

    /// Diagnostic log file; `None` writes to standard output
    pub logfile: Option<PathBuf>,

    /// Make all targets
    pub make_all: bool,

    /// Only report which targets would be made
    pub query_only: bool,

    /// Echo recipes as they run
    pub echo_recipes: bool,

    /// Suppress warnings
    pub no_warnings: bool,

    /// Print debug diagnostics
    pub debug: bool,
}

impl RuntimeConfig {
    /// Returns the all-defaults configuration rooted at `cwd`.
    #[must_use]
    pub fn with_defaults(cwd: &Path) -> Self {
        Self {
            targets: Vec::new(),
            directory: cwd.to_path_buf(),
            makefile: cwd.join(defaults::MAKEFILE),
            git_branch: defaults::GIT_BRANCH.to_string(),
            jobs: defaults::JOBS,
            shell: defaults::SHELL.to_string(),
            environ: defaults::ENVIRON.to_string(),
            assume_old: BTreeSet::new(),
            assume_new: BTreeSet::new(),
            assume_all_new: false,
            logfile: None,
            make_all: false,
            query_only: false,
            echo_recipes: false,
            no_warnings: false,
            debug: false,
        }
    }

    /// Resolves `args` (without the program name) against the process
    /// working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be read or the
    /// command line is malformed (see [`RuntimeConfig::resolve_in`]).
    pub fn resolve<S: AsRef<str>>(
        args: &[S],
        log: &mut DiagnosticLog,
    ) -> Result<Invocation, ConfigError> {
        let cwd = std::env::current_dir().map_err(|source| ConfigError::CurrentDir { source })?;
        Self::resolve_in(args, &cwd, log)
    }

    /// Resolves `args` (without the program name) relative to `cwd`.
    ///
    /// Soft problems (unknown options, bad values, missing paths) are
    /// recorded in `log` and replaced by defaults. On success the log's
    /// channel gates and destination are configured from the result,
    /// ready for a single flush.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingValue`] if a required-value option is
    /// the last token.
    pub fn resolve_in<S: AsRef<str>>(
        args: &[S],
        cwd: &Path,
        log: &mut DiagnosticLog,
    ) -> Result<Invocation, ConfigError> {
        let raw = match tokenize(args, log)? {
            Tokenized::Args(raw) => raw,
            Tokenized::Help => return Ok(Invocation::Help(help::help_text())),
            Tokenized::Version => return Ok(Invocation::Version(help::version_text())),
        };

        let config = Resolver::new(raw, cwd, log).resolve();
        log.configure(config.debug, config.echo_recipes, !config.no_warnings);

        Ok(Invocation::Run(config))
    }

    /// Splits [`RuntimeConfig::environ`] into `(KEY, VALUE)` pairs.
    ///
    /// Items without `=` or with an empty key are skipped.
    pub fn environment_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.environ
            .split(',')
            .filter_map(|item| item.split_once('='))
            .map(|(key, value)| (key.trim(), value))
            .filter(|(key, _)| !key.is_empty())
    }
}

impl fmt::Display for RuntimeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let logfile = self
            .logfile
            .as_ref()
            .map_or_else(|| "stdout".to_string(), |p| p.display().to_string());

        writeln!(f, "Working directory: {}", self.directory.display())?;
        writeln!(f, "Reading from: {}", self.makefile.display())?;
        writeln!(f, "Specified git branch: {}", self.git_branch)?;
        writeln!(f, "Jobs running at once: {}", self.jobs)?;
        writeln!(f, "Shell: {}", self.shell)?;
        writeln!(f, "Environment: {}", self.environ)?;
        writeln!(f, "Assume old: {}", join_paths(&self.assume_old))?;
        writeln!(f, "Assume new: {}", join_paths(&self.assume_new))?;
        writeln!(f, "Assume all new: {}", self.assume_all_new)?;
        writeln!(f, "Log file: {logfile}")?;
        writeln!(f, "Make all targets: {}", self.make_all)?;
        writeln!(f, "Query only: {}", self.query_only)?;
        writeln!(f, "Echo recipes: {}", self.echo_recipes)?;
        writeln!(f, "Warnings: {}", !self.no_warnings)?;
        write!(f, "Targets: {}", self.targets.join(" "))
    }
}

fn join_paths(paths: &BTreeSet<PathBuf>) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(",")
}
