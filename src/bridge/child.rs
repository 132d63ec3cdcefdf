//! What to run and how.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::env::ChildEnv;

/// A fully resolved child invocation.
#[derive(Debug, Clone)]
pub struct ChildSpec {
    /// Program to execute (absolute path or PATH-resolvable name).
    pub program: String,

    /// Arguments after the program.
    pub args: Vec<String>,

    /// Working directory; always the installation root.
    pub cwd: PathBuf,

    /// Environment layered over the launcher's own.
    pub env: ChildEnv,
}

impl ChildSpec {
    /// Create an invocation of `program` in `cwd`.
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            env: ChildEnv::new(),
        }
    }

    /// Append arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Replace the environment layer.
    pub fn with_env(mut self, env: ChildEnv) -> Self {
        self.env = env;
        self
    }

    /// The program followed by its arguments.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }

    /// Build the [`Command`]: inherited stdio, installation root as cwd,
    /// environment resolved against the launcher's.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .current_dir(&self.cwd)
            .envs(self.env.resolve_from_process())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_starts_with_program() {
        let spec = ChildSpec::new("/usr/bin/python3", "/opt/docs").args(["src/server.py", "--x"]);
        assert_eq!(spec.argv(), vec!["/usr/bin/python3", "src/server.py", "--x"]);
    }

    #[test]
    fn command_runs_in_cwd() {
        let spec = ChildSpec::new("python3", "/opt/docs");
        let cmd = spec.command();
        assert_eq!(cmd.get_current_dir(), Some(std::path::Path::new("/opt/docs")));
        assert_eq!(cmd.get_program(), "python3");
    }

    #[test]
    fn command_carries_env_layer() {
        let config = crate::config::EnvConfig {
            overrides: [("DOCLAUNCH_CHILD_TEST".to_string(), "yes".to_string())].into(),
            ..Default::default()
        };
        let env = ChildEnv::from_config(&config, std::path::Path::new("/"));
        let cmd = ChildSpec::new("true", "/").with_env(env).command();

        let expected = Some(std::ffi::OsStr::new("yes"));
        assert!(cmd
            .get_envs()
            .any(|(key, value)| key == "DOCLAUNCH_CHILD_TEST" && value == expected));
    }
}
