//! Remediation hints for failed prerequisites.
//!
//! Each hint is what gets printed under the error line, so it should tell
//! the user the next concrete thing to do.

use std::path::Path;

/// Shown when `docker` is not on PATH.
pub fn docker_install() -> String {
    [
        "Please install Docker:",
        "  - macOS: https://docs.docker.com/desktop/install/mac-install/",
        "  - Linux: https://docs.docker.com/engine/install/",
        "  - Windows: https://docs.docker.com/desktop/install/windows-install/",
    ]
    .join("\n")
}

/// Shown when `docker info` fails.
pub fn docker_daemon() -> String {
    [
        "Please start Docker Desktop or the Docker daemon:",
        "  - macOS/Windows: Start the Docker Desktop application",
        "  - Linux: sudo systemctl start docker",
    ]
    .join("\n")
}

/// Shown when the compose file is missing from the install root.
pub fn compose_file_missing(root: &Path) -> String {
    format!(
        "Expected the service definition inside {}. Pass --root (or set DOCLAUNCH_ROOT) to point at the install directory.",
        root.display()
    )
}

/// Shown when the target script is missing from the install root.
pub fn target_missing(root: &Path) -> String {
    format!(
        "The server script must live inside {}. Reinstall the package or pass --root to point at a complete checkout.",
        root.display()
    )
}

/// Shown when no interpreter candidate resolves.
pub fn interpreter_missing(min_version: &str, candidates: &[String]) -> String {
    format!(
        "Python {} or higher is required (looked for: {}). Install it from https://www.python.org/downloads/ or use --mode container.",
        min_version,
        candidates.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docker_install_lists_platforms() {
        let hint = docker_install();
        assert!(hint.contains("macOS"));
        assert!(hint.contains("Linux"));
        assert!(hint.contains("Windows"));
        assert!(hint.contains("https://docs.docker.com"));
    }

    #[test]
    fn docker_daemon_mentions_systemctl() {
        assert!(docker_daemon().contains("systemctl start docker"));
    }

    #[test]
    fn file_hints_name_the_root() {
        let root = Path::new("/opt/docs");
        assert!(compose_file_missing(root).contains("/opt/docs"));
        assert!(target_missing(root).contains("/opt/docs"));
    }

    #[test]
    fn interpreter_hint_lists_candidates() {
        let hint = interpreter_missing("3.10", &["python3".into(), "python".into()]);
        assert!(hint.contains("3.10"));
        assert!(hint.contains("python3, python"));
    }
}
