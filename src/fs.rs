//! Filesystem validation for path-valued options.
//!
//! Every query turns user text into an absolute, lexically normalized path
//! and returns `None` instead of failing when the path is not usable, so the
//! caller can fall back to a default.

use std::path::{Component, Path, PathBuf};

/// Returns the directory `text` denotes, if it exists.
///
/// Relative input is resolved against `base`.
#[must_use]
pub fn resolve_existing_dir(base: &Path, text: &str) -> Option<PathBuf> {
    let path = absolutize(base, text)?;
    path.is_dir().then_some(path)
}

/// Returns the regular file `text` denotes, if it exists.
///
/// Relative input is resolved against `base`.
#[must_use]
pub fn resolve_existing_file(base: &Path, text: &str) -> Option<PathBuf> {
    let path = absolutize(base, text)?;
    path.is_file().then_some(path)
}

/// Returns the path `text` denotes if a file could be created there.
///
/// The parent directory must exist and the path must not be a directory.
/// The file itself may or may not exist.
#[must_use]
pub fn resolve_writable_file(base: &Path, text: &str) -> Option<PathBuf> {
    let path = absolutize(base, text)?;
    if path.is_dir() {
        return None;
    }
    path.parent().is_some_and(Path::is_dir).then_some(path)
}

/// Resolves `text` against `base` into an absolute, normalized path.
///
/// A leading `~` expands to the home directory. Returns `None` for empty
/// input or when `~` cannot be expanded.
#[must_use]
pub fn absolutize(base: &Path, text: &str) -> Option<PathBuf> {
    if text.is_empty() {
        return None;
    }
    let expanded = expand_tilde(text)?;
    Some(normalize(&base.join(expanded)))
}

fn expand_tilde(text: &str) -> Option<PathBuf> {
    if text == "~" {
        return dirs::home_dir();
    }
    match text.strip_prefix("~/") {
        Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
        None => Some(PathBuf::from(text)),
    }
}

/// Removes `.` and resolves `..` lexically, without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
