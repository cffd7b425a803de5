//! Help and version text.
//!
//! Rendered by clap from the [`Opt`] registry so the usage text always
//! matches what the tokenizer accepts.

use clap::{Arg, ArgAction, Command};

use super::defaults;
use super::option::{Arity, Opt};

/// Builds the clap command describing the jmake command line.
#[must_use]
pub fn command() -> Command {
    Command::new("jmake")
        .version(defaults::VERSION)
        .about("JMake build system")
        .override_usage("jmake [OPTIONS] [TARGETS]...")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args(Opt::ALL.into_iter().map(arg))
        .arg(
            Arg::new("targets")
                .value_name("TARGETS")
                .help("Targets to build")
                .num_args(0..),
        )
}

/// Usage text printed for `-h`.
#[must_use]
pub fn help_text() -> String {
    command().render_help().to_string()
}

/// Version line printed for `-v`.
#[must_use]
pub fn version_text() -> String {
    command().render_version()
}

fn arg(opt: Opt) -> Arg {
    let id = opt.long().unwrap_or("debug");
    let mut arg = Arg::new(id).short(opt.short()).help(opt.description());
    if let Some(long) = opt.long() {
        arg = arg.long(long);
    }

    match opt.arity() {
        Arity::Flag => arg.action(ArgAction::SetTrue),
        Arity::Required => arg
            .action(ArgAction::Append)
            .num_args(1)
            .value_name(opt.value_name().unwrap_or("VALUE")),
        Arity::Optional => arg
            .action(ArgAction::Append)
            .num_args(0..=1)
            .value_name(opt.value_name().unwrap_or("VALUE")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn help_lists_every_option() {
        let help = help_text();

        for opt in Opt::ALL {
            assert!(
                help.contains(&format!("-{}", opt.short())),
                "missing -{} in help",
                opt.short()
            );
            if let Some(long) = opt.long() {
                assert!(help.contains(&format!("--{long}")), "missing --{long} in help");
            }
        }
    }

    #[test]
    fn version_names_the_crate_version() {
        assert_eq!(version_text().trim_end(), format!("jmake {}", defaults::VERSION));
    }
}
