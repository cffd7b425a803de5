//! Tests for single-valued options: shell, environ, git branch, jobs.

use super::*;

mod strings {
    use super::*;

    #[test]
    fn shell_environ_and_branch_take_value() {
        let fx = Fixture::new();
        let (config, log) = fx.resolve(&["-s", "/bin/sh", "-e", "A=1,B=2", "-g", "release"]);

        assert_eq!(config.shell, "/bin/sh");
        assert_eq!(config.environ, "A=1,B=2");
        assert_eq!(config.git_branch, "release");
        assert!(warnings(&log).is_empty());
    }

    #[test]
    fn first_value_wins_with_warning() {
        let fx = Fixture::new();
        let (config, log) = fx.resolve(&["-s", "/bin/zsh", "--shell", "/bin/sh"]);

        assert_eq!(config.shell, "/bin/zsh");
        assert_eq!(warnings(&log).len(), 1);
        assert!(warnings(&log)[0].contains("only the first valid one"));
    }

    #[test]
    fn option_looking_value_is_discarded() {
        let fx = Fixture::new();
        let (config, log) = fx.resolve(&["-g", "-a"]);

        assert_eq!(config.git_branch, "");
        assert!(!config.make_all);
        assert_eq!(warnings(&log).len(), 1);
        assert!(warnings(&log)[0].contains("has no value"));
    }

    #[test]
    fn discarded_value_does_not_count_as_duplicate() {
        let fx = Fixture::new();
        let (config, log) = fx.resolve(&["-s", "-w", "-s", "/bin/dash"]);

        assert_eq!(config.shell, "/bin/dash");
        assert!(warnings(&log).is_empty());
    }
}

mod jobs {
    use super::*;

    #[test]
    fn positive_count_is_used() {
        let fx = Fixture::new();
        let (config, log) = fx.resolve(&["-j", "4"]);

        assert_eq!(config.jobs, 4);
        assert!(warnings(&log).is_empty());
    }

    #[test]
    fn long_form_works() {
        let fx = Fixture::new();
        let (config, _) = fx.resolve(&["--jobs-num", "12"]);

        assert_eq!(config.jobs, 12);
    }

    #[test]
    fn invalid_counts_fall_back_with_one_warning() {
        let fx = Fixture::new();

        for bad in ["0", "-3", "abc", "", "2.5"] {
            let (config, log) = fx.resolve(&["-j", bad]);

            assert_eq!(config.jobs, 1, "-j {bad:?}");
            assert_eq!(warnings(&log).len(), 1, "-j {bad:?}: {:?}", warnings(&log));
        }
    }

    #[test]
    fn invalid_candidates_are_skipped_silently() {
        let fx = Fixture::new();
        let (config, log) = fx.resolve(&["-j", "zero", "-j", "0", "-j", "3", "-j", "5"]);

        assert_eq!(config.jobs, 3);
        // Only the "several values" warning; no per-item complaints
        assert_eq!(warnings(&log).len(), 1);
    }

    #[test]
    fn all_invalid_candidates_warn_once_more() {
        let fx = Fixture::new();
        let (config, log) = fx.resolve(&["-j", "x", "-j", "0"]);

        assert_eq!(config.jobs, 1);
        assert_eq!(warnings(&log).len(), 2);
        assert!(warnings(&log)[1].contains("using default 1"));
    }
}
