//! Error types for launcher operations.
//!
//! This module defines [`LauncherError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant is a launcher-side fault and maps to exit status 1
//! - Use `LauncherError::Other` (via `anyhow`) for unexpected errors
//! - Variants that the user can act on carry a remediation hint
//!
//! A child that terminates by signal is not an error; see
//! [`ChildExit`](crate::bridge::ChildExit).

use std::path::PathBuf;
use thiserror::Error;

/// Exit status used for every launcher-side fault.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// A required file or binary is not present.
    #[error("Missing prerequisite '{name}': {message}")]
    PreconditionMissing {
        name: String,
        message: String,
        remediation: Option<String>,
    },

    /// The build or start step of the backing service failed.
    #[error("Provisioning step '{step}' failed for service '{service}' (exit code {code:?})")]
    ProvisionFailed {
        service: String,
        step: String,
        code: Option<i32>,
    },

    /// The backing service did not report running within the poll ceiling.
    #[error("Service '{service}' was not running after {attempts} status checks")]
    ProvisionTimeout { service: String, attempts: u32 },

    /// The target executable could not be started.
    #[error("Failed to start '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LauncherError {
    /// Human-actionable hint to print after the error, if any.
    pub fn remediation(&self) -> Option<&str> {
        match self {
            LauncherError::PreconditionMissing { remediation, .. } => remediation.as_deref(),
            LauncherError::ProvisionTimeout { .. } => {
                Some("Inspect the service with `docker compose ps` and `docker compose logs`.")
            }
            _ => None,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
