//! Command-line tokenizer.
//!
//! Splits the argument vector into raw per-option values, the set of options
//! that were seen, and the positional build targets. No value is interpreted
//! here; that is the resolver's job.
//!
//! # Leniency
//!
//! Unknown options produce a warning and are skipped. The only hard failure
//! is a required-value option in last position.

use std::collections::{BTreeMap, BTreeSet};

use crate::diagnostics::{Channel, DiagnosticLog};

use super::error::ConfigError;
use super::option::{Arity, Opt, looks_like_option};

/// Token that ends option parsing.
const END_OF_OPTIONS: &str = "--";

/// Outcome of tokenizing an argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tokenized {
    /// Regular run; resolve these raw values.
    Args(RawArgs),
    /// `-h`/`--help` was given.
    Help,
    /// `-v`/`--version` was given.
    Version,
}

/// Raw option values collected by the tokenizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArgs {
    values: BTreeMap<Opt, Vec<String>>,
    seen: BTreeSet<Opt>,
    targets: Vec<String>,
}

impl RawArgs {
    /// Returns `true` if the option appeared at least once.
    #[must_use]
    pub fn is_seen(&self, opt: Opt) -> bool {
        self.seen.contains(&opt)
    }

    /// Raw values collected for `opt`, in command-line order.
    #[must_use]
    pub fn values(&self, opt: Opt) -> &[String] {
        self.values.get(&opt).map(Vec::as_slice).unwrap_or_default()
    }

    /// Positional targets, in command-line order.
    #[must_use]
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub(crate) fn into_targets(self) -> Vec<String> {
        self.targets
    }

    fn push_value(&mut self, opt: Opt, value: &str) {
        self.values.entry(opt).or_default().push(value.to_string());
    }
}

/// Tokenizes `args` (without the program name).
///
/// Help and version win over everything else, wherever they appear before
/// `--`. Unknown options are reported on the warning channel of `log`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingValue`] if a required-value option is the
/// last token.
pub fn tokenize<S: AsRef<str>>(
    args: &[S],
    log: &mut DiagnosticLog,
) -> Result<Tokenized, ConfigError> {
    if let Some(terminal) = find_terminal(args) {
        tracing::debug!(option = %terminal, "terminal option requested");
        return Ok(match terminal {
            Opt::Version => Tokenized::Version,
            _ => Tokenized::Help,
        });
    }

    let mut raw = RawArgs::default();
    let mut tokens = args.iter().map(AsRef::as_ref).peekable();

    while let Some(token) = tokens.next() {
        if token == END_OF_OPTIONS {
            raw.targets.extend(tokens.by_ref().map(str::to_string));
            break;
        }

        if !looks_like_option(token) {
            raw.targets.push(token.to_string());
            continue;
        }

        let Some(opt) = Opt::lookup(token) else {
            log.append(
                Channel::Warning,
                format!("Unrecognized option '{token}' ignored"),
            );
            continue;
        };

        raw.seen.insert(opt);

        match opt.arity() {
            Arity::Flag => {}
            Arity::Required => {
                let value = tokens
                    .next()
                    .ok_or_else(|| ConfigError::missing_value(token))?;
                raw.push_value(opt, value);
            }
            Arity::Optional => {
                if let Some(value) = tokens.next_if(|next| !looks_like_option(next)) {
                    raw.push_value(opt, value);
                }
            }
        }
    }

    tracing::debug!(
        options = raw.seen.len(),
        targets = raw.targets.len(),
        "tokenized command line"
    );

    Ok(Tokenized::Args(raw))
}

fn find_terminal<S: AsRef<str>>(args: &[S]) -> Option<Opt> {
    args.iter()
        .map(AsRef::as_ref)
        .take_while(|token| *token != END_OF_OPTIONS)
        .filter_map(Opt::lookup)
        .find(|opt| opt.is_terminal())
}
