//! Install root discovery.
//!
//! Relative paths in the config resolve against the install root, never
//! against the caller's working directory.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Install root for an executable at `exe`.
///
/// `<root>/bin/doclaunch` maps to `<root>`; anything else maps to the
/// executable's own directory.
pub fn install_root_for_exe(exe: &Path) -> PathBuf {
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    if dir.file_name().is_some_and(|name| name == "bin") {
        dir.parent().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf())
    } else {
        dir.to_path_buf()
    }
}

/// Resolve the install root, preferring an explicit path.
pub fn resolve_install_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let root = match explicit {
        Some(path) => path.to_path_buf(),
        None => install_root_for_exe(&std::env::current_exe()?),
    };
    Ok(std::path::absolute(root)?)
}
