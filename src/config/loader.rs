//! Configuration file discovery and loading.

use crate::config::schema::LauncherConfig;
use crate::config::validator::validate;
use crate::error::{LauncherError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config directory inside the install root.
pub const CONFIG_DIR: &str = ".doclaunch";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Default config location for an install root.
pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Parse config YAML. An empty document yields the defaults.
pub fn parse_config(content: &str, path: &Path) -> Result<LauncherConfig> {
    if content.trim().is_empty() {
        return Ok(LauncherConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| LauncherError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LauncherConfig> {
    if !path.exists() {
        return Err(LauncherError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Load and validate the config for an install root.
///
/// An explicit path must exist. Without one, `<root>/.doclaunch/config.yml`
/// is used when present and the built-in defaults otherwise.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<LauncherConfig> {
    let config = match explicit {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading explicit config");
            load_config_file(path)?
        }
        None => {
            let path = default_config_path(root);
            if path.is_file() {
                tracing::debug!(path = %path.display(), "loading config");
                load_config_file(&path)?
            } else {
                tracing::debug!("no config file; using defaults");
                LauncherConfig::default()
            }
        }
    };

    validate(&config)?;
    Ok(config)
}
