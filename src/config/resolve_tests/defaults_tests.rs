//! Tests for defaults, flags, idempotence and terminal options.

use super::*;

mod defaults {
    use super::*;

    #[test]
    fn no_options_yields_defaults_and_targets() {
        let fx = Fixture::new();
        let (config, log) = fx.resolve(&["all", "install", "all"]);

        let mut expected = fx.defaults();
        expected.targets = vec!["all".into(), "install".into(), "all".into()];

        assert_eq!(config, expected);
        assert!(log.is_empty());
    }

    #[test]
    fn default_values_are_documented_ones() {
        let fx = Fixture::new();
        let (config, _) = fx.resolve(&[]);

        assert_eq!(config.directory, fx.root());
        assert_eq!(config.makefile, fx.path("Makefile"));
        assert_eq!(config.git_branch, "");
        assert_eq!(config.jobs, 1);
        assert_eq!(config.shell, "/bin/bash");
        assert_eq!(config.environ, "");
        assert!(config.assume_old.is_empty());
        assert!(config.assume_new.is_empty());
        assert!(!config.assume_all_new);
        assert!(config.logfile.is_none());
        assert!(!config.make_all);
        assert!(!config.query_only);
        assert!(!config.echo_recipes);
        assert!(!config.no_warnings);
        assert!(!config.debug);
    }

    #[test]
    fn absent_options_leave_fields_untouched() {
        let fx = Fixture::new();
        let (config, log) = fx.resolve(&["-j", "3"]);

        let mut expected = fx.defaults();
        expected.jobs = 3;

        assert_eq!(config, expected);
        assert!(log.is_empty());
    }

    #[test]
    fn resolving_twice_is_structurally_equal() {
        let fx = Fixture::new();
        let args = [
            "-d", "sub", "-f", "build.mk", "-j", "2", "-o", "s.c", "-n", "-g", "dev", "-a", "t1",
        ];

        let (first, _) = fx.resolve(&args);
        let (second, _) = fx.resolve(&args);

        assert_eq!(first, second);
    }
}

mod flags {
    use super::*;

    #[test]
    fn boolean_flags_set_their_fields() {
        let fx = Fixture::new();
        let (config, _) = fx.resolve(&["-a", "-q", "-r", "-w", "-D"]);

        assert!(config.make_all);
        assert!(config.query_only);
        assert!(config.echo_recipes);
        assert!(config.no_warnings);
        assert!(config.debug);
    }

    #[test]
    fn flags_configure_log_gates() {
        let fx = Fixture::new();

        let (_, log) = fx.resolve(&[]);
        assert!(!log.is_enabled(Channel::Debug));
        assert!(!log.is_enabled(Channel::Recipe));
        assert!(log.is_enabled(Channel::Warning));

        let (_, log) = fx.resolve(&["-D", "-r", "-w"]);
        assert!(log.is_enabled(Channel::Debug));
        assert!(log.is_enabled(Channel::Recipe));
        assert!(!log.is_enabled(Channel::Warning));
        assert!(log.is_enabled(Channel::Target));
        assert!(log.is_enabled(Channel::Error));
    }
}

mod terminal {
    use super::*;

    fn invoke(fx: &Fixture, args: &[&str]) -> Invocation {
        let mut log = DiagnosticLog::new();
        RuntimeConfig::resolve_in(args, fx.root(), &mut log).unwrap()
    }

    #[test]
    fn help_returns_usage_text() {
        let fx = Fixture::new();
        let Invocation::Help(text) = invoke(&fx, &["-j", "4", "all", "--help"]) else {
            panic!("expected help");
        };

        assert!(text.contains("Usage"));
        assert!(text.contains("--assume-new"));
    }

    #[test]
    fn version_returns_version_text() {
        let fx = Fixture::new();
        let Invocation::Version(text) = invoke(&fx, &["-v", "-d", "missing"]) else {
            panic!("expected version");
        };

        assert!(text.contains(crate::config::defaults::VERSION));
    }

    #[test]
    fn terminal_options_leave_log_empty() {
        let fx = Fixture::new();
        let mut log = DiagnosticLog::new();
        RuntimeConfig::resolve_in(&["-x", "-h"], fx.root(), &mut log).unwrap();

        assert!(log.is_empty());
    }
}

mod presentation {
    use super::*;

    #[test]
    fn environment_pairs_split_assignments() {
        let fx = Fixture::new();
        let (config, _) = fx.resolve(&["-e", "CC=gcc,CFLAGS=-O2 -g,broken,=x,EMPTY="]);

        let pairs: Vec<_> = config.environment_pairs().collect();

        assert_eq!(
            pairs,
            [("CC", "gcc"), ("CFLAGS", "-O2 -g"), ("EMPTY", "")]
        );
    }

    #[test]
    fn summary_mentions_key_fields() {
        let fx = Fixture::new();
        let (config, _) = fx.resolve(&["-j", "6", "-g", "trunk", "lib"]);

        let summary = config.to_string();

        assert!(summary.contains("Jobs running at once: 6"));
        assert!(summary.contains("Specified git branch: trunk"));
        assert!(summary.contains("Log file: stdout"));
        assert!(summary.ends_with("Targets: lib"));
    }
}
