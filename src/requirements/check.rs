//! Prerequisite definitions and the context they are evaluated against.

use crate::requirements::probe::{parse_system_path, resolve_tool_path};
use crate::shell::execute_check;
use std::path::{Path, PathBuf};

/// How a prerequisite is verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrerequisiteCheck {
    /// A file must exist at this path.
    FileExists(PathBuf),

    /// A binary must be resolvable on the search path.
    OnPath(String),

    /// A probe command must exit with status 0.
    CommandSucceeds { program: String, args: Vec<String> },
}

/// A named check with the message shown when it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prerequisite {
    /// Short name used in diagnostics (e.g. "docker", "compose file").
    pub name: String,

    /// The check to run.
    pub check: PrerequisiteCheck,

    /// What went wrong, in one line.
    pub failure: String,

    /// What the user can do about it.
    pub remediation: Option<String>,
}

impl Prerequisite {
    /// Require a file to exist.
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: name.into(),
            failure: format!("{} not found", path.display()),
            check: PrerequisiteCheck::FileExists(path),
            remediation: None,
        }
    }

    /// Require a binary on the search path.
    pub fn binary(binary: impl Into<String>) -> Self {
        let binary = binary.into();
        Self {
            name: binary.clone(),
            failure: format!("{} is not installed or not found in PATH", binary),
            check: PrerequisiteCheck::OnPath(binary),
            remediation: None,
        }
    }

    /// Require a probe command to succeed.
    pub fn command<S: Into<String>>(
        name: impl Into<String>,
        program: impl Into<String>,
        args: impl IntoIterator<Item = S>,
    ) -> Self {
        let program = program.into();
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        Self {
            name: name.into(),
            failure: format!("`{} {}` failed", program, args.join(" ")),
            check: PrerequisiteCheck::CommandSucceeds { program, args },
            remediation: None,
        }
    }

    /// Replace the failure message.
    pub fn with_failure(mut self, failure: impl Into<String>) -> Self {
        self.failure = failure.into();
        self
    }

    /// Attach a remediation hint.
    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }
}

/// The system facts prerequisites are checked against.
///
/// Production code uses [`SystemContext`]; tests substitute a fake.
pub trait CheckContext {
    /// Resolve a binary name on the search path.
    fn resolve(&self, binary: &str) -> Option<PathBuf>;

    /// Whether a probe command exits successfully.
    fn succeeds(&self, program: &str, args: &[String]) -> bool;

    /// Whether a file exists.
    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Checks against the real PATH and filesystem.
#[derive(Debug, Clone)]
pub struct SystemContext {
    search_path: Vec<PathBuf>,
    cwd: Option<PathBuf>,
}

impl SystemContext {
    /// Use the process PATH.
    pub fn new() -> Self {
        Self::with_search_path(parse_system_path())
    }

    /// Use an explicit list of search directories.
    pub fn with_search_path(search_path: Vec<PathBuf>) -> Self {
        Self {
            search_path,
            cwd: None,
        }
    }

    /// Run probe commands from this directory.
    pub fn in_dir(mut self, cwd: &Path) -> Self {
        self.cwd = Some(cwd.to_path_buf());
        self
    }
}

impl Default for SystemContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckContext for SystemContext {
    fn resolve(&self, binary: &str) -> Option<PathBuf> {
        resolve_tool_path(binary, &self.search_path)
    }

    fn succeeds(&self, program: &str, args: &[String]) -> bool {
        let Some(resolved) = self.resolve(program) else {
            return false;
        };
        execute_check(&resolved.to_string_lossy(), args, self.cwd.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_prerequisite_mentions_path() {
        let prereq = Prerequisite::file("compose file", "/srv/app/docker-compose.yml");
        assert_eq!(prereq.name, "compose file");
        assert!(prereq.failure.contains("/srv/app/docker-compose.yml"));
        assert!(prereq.remediation.is_none());
    }

    #[test]
    fn binary_prerequisite_checks_path() {
        let prereq = Prerequisite::binary("docker").with_remediation("Install Docker");
        assert_eq!(prereq.check, PrerequisiteCheck::OnPath("docker".into()));
        assert_eq!(prereq.remediation.as_deref(), Some("Install Docker"));
    }

    #[test]
    fn command_prerequisite_keeps_args() {
        let prereq = Prerequisite::command("docker daemon", "docker", ["info"])
            .with_failure("Docker daemon is not running");
        assert_eq!(
            prereq.check,
            PrerequisiteCheck::CommandSucceeds {
                program: "docker".into(),
                args: vec!["info".into()],
            }
        );
        assert_eq!(prereq.failure, "Docker daemon is not running");
    }

    #[test]
    fn system_context_with_empty_path_resolves_nothing() {
        let ctx = SystemContext::with_search_path(Vec::new());
        assert!(ctx.resolve("sh").is_none());
        assert!(!ctx.succeeds("sh", &["-c".into(), "exit 0".into()]));
    }

    #[test]
    #[cfg(unix)]
    fn system_context_runs_probe_commands() {
        let ctx = SystemContext::new();
        assert!(ctx.succeeds("sh", &["-c".into(), "exit 0".into()]));
        assert!(!ctx.succeeds("sh", &["-c".into(), "exit 1".into()]));
    }

    #[test]
    fn default_file_exists_ignores_directories() {
        let temp = TempDir::new().unwrap();
        let ctx = SystemContext::with_search_path(Vec::new());
        assert!(!ctx.file_exists(temp.path()));

        let file = temp.path().join("server.py");
        std::fs::write(&file, "").unwrap();
        assert!(ctx.file_exists(&file));
    }
}
