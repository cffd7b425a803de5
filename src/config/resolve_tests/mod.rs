//! Tests for option resolution.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::diagnostics::{Channel, DiagnosticLog};

use super::runtime::{Invocation, RuntimeConfig};

/// Scratch project directory:
///
/// ```text
/// Makefile  a.c  c.c  x.c
/// sub/Makefile  sub/build.mk  sub/s.c
/// logs/
/// ```
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        std::fs::create_dir(root.join("sub")).unwrap();
        std::fs::create_dir(root.join("logs")).unwrap();
        for file in [
            "Makefile",
            "a.c",
            "c.c",
            "x.c",
            "sub/Makefile",
            "sub/build.mk",
            "sub/s.c",
        ] {
            std::fs::write(root.join(file), "").unwrap();
        }
        Self { dir }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    fn defaults(&self) -> RuntimeConfig {
        RuntimeConfig::with_defaults(self.root())
    }

    /// Resolves `args` and returns the configuration plus the unflushed log.
    fn resolve(&self, args: &[&str]) -> (RuntimeConfig, DiagnosticLog) {
        let mut log = DiagnosticLog::new();
        match RuntimeConfig::resolve_in(args, self.root(), &mut log).unwrap() {
            Invocation::Run(config) => (config, log),
            other => panic!("expected a run, got {other:?}"),
        }
    }
}

fn warnings(log: &DiagnosticLog) -> &[String] {
    log.entries(Channel::Warning)
}

mod defaults_tests;
mod scalar_tests;
