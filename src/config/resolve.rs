//! Option resolution: raw values to validated configuration fields.
//!
//! Resolution runs in a fixed order because paths are interpreted relative
//! to the already-resolved working directory:
//!
//! shell → environ → directory → makefile → git branch → jobs →
//! assume-old → assume-new → logfile
//!
//! # Value Policy
//!
//! - Options never given keep their default silently.
//! - Values that look like option markers are discarded first.
//! - Scalar options take the **first valid** value; giving more than one
//!   value produces a warning.
//! - File-set options take **every** valid file from every occurrence.
//!   Missing members are dropped without a warning; they are listed on the
//!   debug channel, which only prints with `-D`.
//! - Explicit log paths resolve against the working directory, but a bare
//!   `-l` writes `jmake.log` in the directory jmake was started from.
//! - An explicit `-d` or `-f` that leaves no Makefile in place gets a
//!   warning; the untouched default is not checked.
//! - Nothing here fails: invalid input falls back to the default and
//!   leaves one diagnostic entry.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::diagnostics::{Channel, DiagnosticLog};
use crate::fs;

use super::cli::RawArgs;
use super::defaults;
use super::option::{Arity, Opt, looks_like_option};
use super::runtime::RuntimeConfig;

/// Turns [`RawArgs`] into a [`RuntimeConfig`], reporting into a log.
pub struct Resolver<'a> {
    raw: RawArgs,
    cwd: &'a Path,
    log: &'a mut DiagnosticLog,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver for `raw`, with defaults rooted at `cwd`.
    pub const fn new(raw: RawArgs, cwd: &'a Path, log: &'a mut DiagnosticLog) -> Self {
        Self { raw, cwd, log }
    }

    /// Runs every resolution step in order.
    pub fn resolve(mut self) -> RuntimeConfig {
        let mut config = RuntimeConfig::with_defaults(self.cwd);

        config.make_all = self.raw.is_seen(Opt::MakeAll);
        config.query_only = self.raw.is_seen(Opt::QueryTargets);
        config.echo_recipes = self.raw.is_seen(Opt::EchoRecipes);
        config.no_warnings = self.raw.is_seen(Opt::NoWarnings);
        config.debug = self.raw.is_seen(Opt::Debug);

        if let Some(shell) = self.first_valid(Opt::Shell, &config.shell, accept) {
            config.shell = shell;
        }

        if let Some(environ) = self.first_valid(Opt::Environ, "no assignments", accept) {
            config.environ = environ;
        }

        self.resolve_directory(&mut config);
        self.resolve_makefile(&mut config);

        if let Some(branch) = self.first_valid(Opt::GitBranch, "the current branch", accept) {
            config.git_branch = branch;
        }

        if let Some(jobs) = self.first_valid(Opt::Jobs, &config.jobs, parse_jobs) {
            config.jobs = jobs;
        }

        if let Some(files) = self.file_set(Opt::AssumeOld, &config.directory) {
            config.assume_old = files;
        }

        self.resolve_assume_new(&mut config);
        self.resolve_logfile(&mut config);

        config.targets = self.raw.into_targets();

        tracing::debug!(
            directory = %config.directory.display(),
            makefile = %config.makefile.display(),
            jobs = config.jobs,
            targets = config.targets.len(),
            "resolved configuration"
        );

        config
    }

    fn resolve_directory(&mut self, config: &mut RuntimeConfig) {
        let cwd = self.cwd;
        let default = config.directory.display().to_string();
        if let Some(directory) =
            self.first_valid(Opt::Directory, &default, |text| fs::resolve_existing_dir(cwd, text))
        {
            config.makefile = directory.join(defaults::MAKEFILE);
            config.directory = directory;
        }
    }

    fn resolve_makefile(&mut self, config: &mut RuntimeConfig) {
        let directory = config.directory.clone();
        let default = config.makefile.display().to_string();
        if let Some(makefile) = self.first_valid(Opt::Makefile, &default, |text| {
            fs::resolve_existing_file(&directory, text)
        }) {
            config.makefile = makefile;
        }

        // The all-defaults run stays quiet; a missing Makefile is reported
        // by whatever reads it.
        let explicit = self.raw.is_seen(Opt::Directory) || self.raw.is_seen(Opt::Makefile);
        if explicit && !config.makefile.is_file() {
            self.log.append(
                Channel::Warning,
                format!("Makefile {} doesn't exist", config.makefile.display()),
            );
        }
    }

    fn resolve_assume_new(&mut self, config: &mut RuntimeConfig) {
        if !self.raw.is_seen(Opt::AssumeNew) {
            return;
        }

        if self.candidates(Opt::AssumeNew).is_empty() {
            self.log.append(
                Channel::Debug,
                format!(
                    "Option {} given without files; assuming all touched files are new",
                    Opt::AssumeNew
                ),
            );
            config.assume_all_new = true;
            return;
        }

        if let Some(files) = self.file_set(Opt::AssumeNew, &config.directory) {
            config.assume_new = files;
        }
    }

    fn resolve_logfile(&mut self, config: &mut RuntimeConfig) {
        if !self.raw.is_seen(Opt::Logfile) {
            return;
        }

        let directory = config.directory.clone();
        let default = self.cwd.join(defaults::LOGFILE);
        let default_name = default.display().to_string();
        let path = self
            .first_valid(Opt::Logfile, &default_name, |text| {
                fs::resolve_writable_file(&directory, text)
            })
            .unwrap_or(default);

        match self.log.set_destination(&path) {
            Ok(()) => config.logfile = Some(path),
            Err(e) => {
                tracing::warn!("{e}");
                self.log.append(
                    Channel::Warning,
                    format!("{e}; writing diagnostics to standard output"),
                );
            }
        }
    }

    /// Resolves a scalar option: the first candidate `validate` accepts.
    ///
    /// Returns `None` (keep the default) when the option was not given, had
    /// no usable value, or no value validated.
    fn first_valid<T>(
        &mut self,
        opt: Opt,
        default: impl Display,
        validate: impl FnMut(&str) -> Option<T>,
    ) -> Option<T> {
        if !self.raw.is_seen(opt) {
            return None;
        }

        let candidates = self.candidates(opt);
        match candidates.len() {
            0 => {
                self.report_no_value(opt, &default);
                return None;
            }
            1 => {}
            n => {
                self.log.append(
                    Channel::Warning,
                    format!("Option {opt} given {n} values; only the first valid one is used"),
                );
            }
        }

        let resolved = candidates.iter().map(String::as_str).find_map(validate);
        if resolved.is_none() {
            self.log.append(
                Channel::Warning,
                format!(
                    "No valid value for {opt} among {}; using default {default}",
                    candidates.join(", ")
                ),
            );
        }
        resolved
    }

    /// Resolves a file-set option: every existing file from every value.
    ///
    /// Values are comma-separated lists relative to `base`. Returns `None`
    /// when the option was not given or had no usable value.
    fn file_set(&mut self, opt: Opt, base: &Path) -> Option<BTreeSet<PathBuf>> {
        if !self.raw.is_seen(opt) {
            return None;
        }

        let candidates = self.candidates(opt);
        if candidates.is_empty() {
            self.report_no_value(opt, &"no files");
            return None;
        }

        let mut files = BTreeSet::new();
        let mut dropped = Vec::new();
        for item in candidates
            .iter()
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .filter(|item| !item.is_empty())
        {
            match fs::resolve_existing_file(base, item) {
                Some(path) => {
                    files.insert(path);
                }
                None => dropped.push(item),
            }
        }

        if !dropped.is_empty() {
            self.log.append(
                Channel::Debug,
                format!("Option {opt} ignores missing files: {}", dropped.join(", ")),
            );
            if files.is_empty() {
                self.log.append(
                    Channel::Warning,
                    format!("No existing files given to {opt}; the set stays empty"),
                );
            }
        }

        Some(files)
    }

    /// Raw values for `opt` with option-looking values discarded.
    fn candidates(&self, opt: Opt) -> Vec<String> {
        self.raw
            .values(opt)
            .iter()
            .filter(|value| !looks_like_option(value))
            .cloned()
            .collect()
    }

    fn report_no_value(&mut self, opt: Opt, default: &dyn Display) {
        // Optional values may be left out on purpose; required ones can't
        let channel = match opt.arity() {
            Arity::Optional => Channel::Debug,
            Arity::Required | Arity::Flag => Channel::Warning,
        };
        self.log.append(
            channel,
            format!("Option {opt} has no value; using default {default}"),
        );
    }
}

#[allow(clippy::unnecessary_wraps)] // matches the validator signature
fn accept(text: &str) -> Option<String> {
    Some(text.to_string())
}

fn parse_jobs(text: &str) -> Option<u32> {
    text.parse::<u32>().ok().filter(|&jobs| jobs > 0)
}
