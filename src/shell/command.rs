//! External command execution.
//!
//! Commands are run from an argv list, never through a shell, so service
//! names and paths need no quoting.

use crate::error::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Where a child's output stream goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Collect into [`CommandResult`].
    #[default]
    Capture,
    /// Send to the launcher's stderr, keeping stdout clean.
    Stderr,
    /// Discard.
    Null,
}

impl OutputTarget {
    fn stdio(self) -> Stdio {
        match self {
            OutputTarget::Capture => Stdio::piped(),
            OutputTarget::Stderr => Stdio::from(std::io::stderr()),
            OutputTarget::Null => Stdio::null(),
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Where stdout goes.
    pub stdout: OutputTarget,

    /// Where stderr goes.
    pub stderr: OutputTarget,
}

impl CommandOptions {
    /// Capture stdout silently and discard stderr.
    pub fn quiet(cwd: Option<&Path>) -> Self {
        Self {
            cwd: cwd.map(Path::to_path_buf),
            stderr: OutputTarget::Null,
            ..Default::default()
        }
    }

    /// Stream both streams to the launcher's stderr.
    pub fn streamed(cwd: Option<&Path>) -> Self {
        Self {
            cwd: cwd.map(Path::to_path_buf),
            stdout: OutputTarget::Stderr,
            stderr: OutputTarget::Stderr,
            ..Default::default()
        }
    }
}

/// Execute a program with arguments and wait for it to finish.
///
/// Returns `Err` only if the program could not be started.
pub fn execute<S: AsRef<str>>(
    program: &str,
    args: &[S],
    options: &CommandOptions,
) -> Result<CommandResult> {
    let mut cmd = Command::new(program);
    cmd.args(args.iter().map(AsRef::as_ref));

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(options.stdout.stdio());
    cmd.stderr(options.stderr.stdio());

    tracing::debug!(program, "executing command");
    let output = cmd.output()?;

    let stdout = if options.stdout == OutputTarget::Capture {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout,
        success: output.status.success(),
    })
}

/// Execute a command and return success/failure.
pub fn execute_check<S: AsRef<str>>(program: &str, args: &[S], cwd: Option<&Path>) -> bool {
    let options = CommandOptions {
        cwd: cwd.map(Path::to_path_buf),
        stdout: OutputTarget::Null,
        stderr: OutputTarget::Null,
        ..Default::default()
    };

    execute(program, args, &options)
        .map(|r| r.success)
        .unwrap_or(false)
}

/// Execute a command and collect output without streaming.
pub fn execute_quiet<S: AsRef<str>>(
    program: &str,
    args: &[S],
    cwd: Option<&Path>,
) -> Result<CommandResult> {
    execute(program, args, &CommandOptions::quiet(cwd))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn execute_captures_stdout() {
        let result = execute_quiet("sh", &["-c", "echo hello"], None).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_reports_failure_code() {
        let result = execute_quiet("sh", &["-c", "exit 3"], None).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn execute_passes_args_without_shell_splitting() {
        let result = execute_quiet("printf", &["%s|", "a b", "c"], None).unwrap();
        assert_eq!(result.stdout, "a b|c|");
    }

    #[test]
    fn quiet_keeps_stderr_out_of_stdout() {
        let result = execute_quiet("sh", &["-c", "echo out; echo err >&2"], None).unwrap();
        assert_eq!(result.stdout, "out\n");
    }

    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = execute_quiet("pwd", &[] as &[&str], Some(temp.path())).unwrap();

        let reported = std::fs::canonicalize(result.stdout.trim()).unwrap();
        assert_eq!(reported, std::fs::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn streamed_output_is_not_captured() {
        let result = execute("sh", &["-c", "echo hidden"], &CommandOptions::streamed(None)).unwrap();
        assert!(result.success);
        assert!(result.stdout.is_empty());
    }

    #[test]
    fn execute_check_returns_bool() {
        assert!(execute_check("sh", &["-c", "exit 0"], None));
        assert!(!execute_check("sh", &["-c", "exit 1"], None));
    }

    #[test]
    fn missing_program_is_an_error() {
        assert!(execute_quiet("definitely-not-a-real-binary-xyz", &["x"], None).is_err());
        assert!(!execute_check("definitely-not-a-real-binary-xyz", &["x"], None));
    }
}
