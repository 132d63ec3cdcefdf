//! Configuration schema.
//!
//! Every section has built-in defaults matching the documentation server
//! layout, so an install without a config file works unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// How the target is provisioned and started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    /// Run inside a Docker Compose service, building and starting it if needed.
    #[default]
    Container,
    /// Run with a Python interpreter found on PATH.
    Local,
}

impl std::fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchMode::Container => write!(f, "container"),
            LaunchMode::Local => write!(f, "local"),
        }
    }
}

/// Top-level launcher configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Provisioning strategy.
    pub mode: LaunchMode,

    /// Backing service (container mode).
    pub service: ServiceConfig,

    /// What gets run.
    pub target: TargetConfig,

    /// Interpreter lookup (local mode).
    pub interpreter: InterpreterConfig,

    /// Environment handed to the child.
    pub env: EnvConfig,
}

/// Backing service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Container name, matched exactly.
    pub name: String,

    /// Compose file, relative to the install root.
    pub compose_file: PathBuf,

    /// Delay between readiness checks, in milliseconds.
    pub poll_interval_ms: u64,

    /// Readiness checks before giving up.
    pub max_attempts: u32,

    /// Variables passed into the container with `docker exec -e NAME`.
    pub forward_env: Vec<String>,
}

impl ServiceConfig {
    /// Delay between readiness checks.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "mcp-documentation-server".to_string(),
            compose_file: PathBuf::from("docker-compose.yml"),
            poll_interval_ms: 1000,
            max_attempts: 30,
            forward_env: Vec::new(),
        }
    }
}

/// Target script settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfig {
    /// Script path, relative to the install root (and to the container workdir).
    pub script: PathBuf,

    /// Interpreter invoked inside the container.
    pub container_interpreter: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            script: PathBuf::from("src/server.py"),
            container_interpreter: "python".to_string(),
        }
    }
}

/// Local interpreter lookup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpreterConfig {
    /// Command names tried in order.
    pub candidates: Vec<String>,

    /// Minimum version named in the remediation hint.
    pub min_version: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            candidates: vec!["python3".to_string(), "python".to_string()],
            min_version: "3.10".to_string(),
        }
    }
}

/// Child environment settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    /// Always set, replacing any inherited value.
    pub overrides: BTreeMap<String, String>,

    /// Set only when the caller has not set them.
    pub defaults: BTreeMap<String, String>,

    /// Variable set to the install root (module search path).
    pub module_path_var: Option<String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            overrides: BTreeMap::from([("PYTHONUNBUFFERED".to_string(), "1".to_string())]),
            defaults: BTreeMap::from([(
                "PLANTUML_SERVER".to_string(),
                "http://localhost:8080".to_string(),
            )]),
            module_path_var: Some("PYTHONPATH".to_string()),
        }
    }
}
