//! doclaunch - Dependency-bootstrapping launcher for the documentation server.
//!
//! doclaunch makes sure everything the server needs is present, brings up
//! its backing service when running in a container, and then hands the
//! terminal over to the server process: stdio is inherited, the exit code
//! is passed through and interrupts are relayed.
//!
//! # Modules
//!
//! - [`bridge`] - Child process execution, environment and signal relay
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`launcher`] - Check, provision, run sequencing
//! - [`provision`] - Backing service build/start and readiness polling
//! - [`requirements`] - Prerequisite checks and interpreter resolution
//! - [`shell`] - Command execution for probes and provisioning steps
//! - [`ui`] - Diagnostics, spinners, and remediation hints on stderr
//!
//! # Example
//!
//! ```
//! use doclaunch::bridge::ChildEnv;
//! use doclaunch::config::EnvConfig;
//! use std::path::Path;
//!
//! // Defaults apply only where the caller left a variable unset
//! let env = ChildEnv::from_config(&EnvConfig::default(), Path::new("/opt/docs"));
//! let vars = env.resolve(|key| key == "PLANTUML_SERVER");
//! assert!(!vars.contains_key("PLANTUML_SERVER"));
//! assert_eq!(vars["PYTHONPATH"], "/opt/docs");
//! ```
//!
//! For end-to-end runs against fake tools, see the integration tests.

pub mod bridge;
pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod provision;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{LauncherError, Result};
pub use launcher::Launcher;
