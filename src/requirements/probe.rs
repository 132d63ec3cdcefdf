//! Search-path probing for binaries.
//!
//! Lookup walks the PATH entries directly; nothing is shelled out to `which`.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

#[cfg(windows)]
const EXECUTABLE_SUFFIXES: &[&str] = &["", ".exe", ".cmd", ".bat"];
#[cfg(not(windows))]
const EXECUTABLE_SUFFIXES: &[&str] = &[""];

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. A tool given as
/// a path (containing a separator) is checked as-is.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    if tool.is_empty() {
        return None;
    }

    let as_path = Path::new(tool);
    if as_path.components().count() > 1 {
        return (as_path.is_file() && is_executable(as_path)).then(|| as_path.to_path_buf());
    }

    for dir in path_entries {
        for suffix in EXECUTABLE_SUFFIXES {
            let candidate = dir.join(format!("{}{}", tool, suffix));
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
