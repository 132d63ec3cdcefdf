//! Launcher configuration.
//!
//! This module handles:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//! - Install root discovery in [`root`]
//!
//! # Example
//!
//! ```
//! use doclaunch::config::{load_config, LaunchMode};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".doclaunch")).unwrap();
//! fs::write(temp.path().join(".doclaunch/config.yml"), "mode: local").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.mode, LaunchMode::Local);
//! ```
//!
//! # Precedence
//!
//! 1. CLI flags and their `DOCLAUNCH_*` environment variables
//! 2. Config file (`<root>/.doclaunch/config.yml` or `--config`)
//! 3. Built-in defaults

pub mod loader;
pub mod root;
pub mod schema;
pub mod validator;

pub use loader::{default_config_path, load_config, load_config_file, parse_config};
pub use root::{install_root_for_exe, resolve_install_root};
pub use schema::{
    EnvConfig, InterpreterConfig, LaunchMode, LauncherConfig, ServiceConfig, TargetConfig,
};
pub use validator::validate;
