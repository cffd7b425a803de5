//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

/// Version string reported by `-v`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Makefile name looked up in the working directory.
pub const MAKEFILE: &str = "Makefile";

/// Log file name used when `-l` is given without a value.
pub const LOGFILE: &str = "jmake.log";

/// Shell used to run recipes.
pub const SHELL: &str = "/bin/bash";

/// Number of jobs running at once.
pub const JOBS: u32 = 1;

/// Git branch; empty means the currently checked out branch.
pub const GIT_BRANCH: &str = "";

/// Environment assignments passed to recipes.
pub const ENVIRON: &str = "";
