//! Configuration validation.

use crate::config::schema::LauncherConfig;
use crate::error::{LauncherError, Result};

/// Reject configs the launcher cannot act on.
pub fn validate(config: &LauncherConfig) -> Result<()> {
    let mut problems = Vec::new();

    if config.service.name.trim().is_empty() {
        problems.push("service.name must not be empty");
    }
    if config.service.max_attempts == 0 {
        problems.push("service.max_attempts must be at least 1");
    }
    if config.target.script.as_os_str().is_empty() {
        problems.push("target.script must not be empty");
    }
    if config.target.container_interpreter.trim().is_empty() {
        problems.push("target.container_interpreter must not be empty");
    }
    if config.interpreter.candidates.iter().all(|c| c.trim().is_empty()) {
        problems.push("interpreter.candidates must name at least one command");
    }
    if config
        .env
        .module_path_var
        .as_deref()
        .is_some_and(|v| v.trim().is_empty())
    {
        problems.push("env.module_path_var must not be empty when set");
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(LauncherError::ConfigValidationError {
            message: problems.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&LauncherConfig::default()).is_ok());
    }

    #[test]
    fn empty_service_name_is_invalid() {
        let mut config = LauncherConfig::default();
        config.service.name = "  ".into();

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("service.name"));
    }

    #[test]
    fn zero_attempts_is_invalid() {
        let mut config = LauncherConfig::default();
        config.service.max_attempts = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn empty_candidates_are_invalid() {
        let mut config = LauncherConfig::default();
        config.interpreter.candidates.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn all_problems_are_reported_together() {
        let mut config = LauncherConfig::default();
        config.service.name.clear();
        config.service.max_attempts = 0;

        let message = validate(&config).unwrap_err().to_string();
        assert!(message.contains("service.name"));
        assert!(message.contains("service.max_attempts"));
    }
}
