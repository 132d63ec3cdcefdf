//! Docker Compose backed service.

use crate::error::{LauncherError, Result};
use crate::requirements::Prerequisite;
use crate::shell::{execute, execute_check, execute_quiet, CommandOptions};
use crate::ui::hints;
use std::path::{Path, PathBuf};

use super::service::ServiceManager;

/// A service defined in a compose file and driven through the `docker` CLI.
#[derive(Debug, Clone)]
pub struct DockerCompose {
    docker: String,
    name: String,
    compose_file: PathBuf,
    root: PathBuf,
    forward_env: Vec<String>,
}

impl DockerCompose {
    /// Create a manager for `name`, defined in `compose_file` under `root`.
    pub fn new(name: impl Into<String>, compose_file: &Path, root: &Path) -> Self {
        Self {
            docker: "docker".to_string(),
            name: name.into(),
            compose_file: root.join(compose_file),
            root: root.to_path_buf(),
            forward_env: Vec::new(),
        }
    }

    /// Use a different `docker` binary.
    pub fn with_docker(mut self, docker: impl Into<String>) -> Self {
        self.docker = docker.into();
        self
    }

    /// Forward these variables into `docker exec` with `-e NAME`.
    pub fn with_forward_env(mut self, names: Vec<String>) -> Self {
        self.forward_env = names;
        self
    }

    fn compose_args(&self, tail: &[&str]) -> Vec<String> {
        let mut args = vec![
            "compose".to_string(),
            "-f".to_string(),
            self.compose_file.to_string_lossy().to_string(),
        ];
        args.extend(tail.iter().map(|s| s.to_string()));
        args
    }

    fn container_listed(&self, all: bool) -> bool {
        let filter = format!("name={}", self.name);
        let mut args = vec!["ps"];
        if all {
            args.push("-a");
        }
        args.extend(["--filter", filter.as_str(), "--format", "{{.Names}}"]);

        match execute_quiet(&self.docker, &args, Some(&self.root)) {
            Ok(result) if result.success => names_include(&result.stdout, &self.name),
            Ok(result) => {
                tracing::debug!(code = ?result.exit_code, "docker ps failed");
                false
            }
            Err(e) => {
                tracing::debug!(error = %e, "docker ps could not run");
                false
            }
        }
    }

    fn compose_step(&self, step: &str, tail: &[&str]) -> Result<()> {
        let args = self.compose_args(tail);
        let result = execute(&self.docker, &args, &CommandOptions::streamed(Some(&self.root)))?;
        if result.success {
            Ok(())
        } else {
            Err(LauncherError::ProvisionFailed {
                service: self.name.clone(),
                step: step.to_string(),
                code: result.exit_code,
            })
        }
    }
}

/// Whether `docker ps` output lists exactly `name`.
///
/// `--filter name=` matches substrings, so every line is compared in full.
pub fn names_include(output: &str, name: &str) -> bool {
    output.lines().any(|line| line.trim() == name)
}

impl ServiceManager for DockerCompose {
    fn name(&self) -> &str {
        &self.name
    }

    fn prerequisites(&self) -> Vec<Prerequisite> {
        vec![
            Prerequisite::binary(&self.docker)
                .with_failure("Docker is not installed or not found in PATH")
                .with_remediation(hints::docker_install()),
            Prerequisite::command("docker daemon", &self.docker, ["info"])
                .with_failure("Docker daemon is not running")
                .with_remediation(hints::docker_daemon()),
        ]
    }

    fn is_running(&mut self) -> bool {
        self.container_listed(false)
    }

    fn exists(&mut self) -> bool {
        self.container_listed(true)
    }

    fn images_exist(&mut self) -> bool {
        let args = self.compose_args(&["config", "--services"]);
        execute_check(&self.docker, &args, Some(&self.root))
    }

    fn build(&mut self) -> Result<()> {
        tracing::info!(service = %self.name, "building images");
        self.compose_step("build", &["build"])
    }

    fn start(&mut self) -> Result<()> {
        tracing::info!(service = %self.name, "starting service");
        self.compose_step("start", &["up", "-d"])
    }

    fn exec_command(&self, command: &[String]) -> Vec<String> {
        let mut argv = vec![self.docker.clone(), "exec".to_string(), "-i".to_string()];
        for var in &self.forward_env {
            argv.push("-e".to_string());
            argv.push(var.clone());
        }
        argv.push(self.name.clone());
        argv.extend(command.iter().cloned());
        argv
    }
}
