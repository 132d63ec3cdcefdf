//! Backing service abstraction.

use crate::error::Result;
use crate::requirements::Prerequisite;

/// Observed state of a backing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    /// No container and no usable service definition.
    Absent,
    /// The images have not been built.
    ImageMissing,
    /// The container exists but is not running.
    Stopped,
    /// The container is running.
    Running,
}

impl ServiceState {
    /// Whether provisioning has to build before starting.
    pub fn needs_build(&self) -> bool {
        matches!(self, ServiceState::Absent | ServiceState::ImageMissing)
    }
}

impl std::fmt::Display for ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ServiceState::Absent => "absent",
            ServiceState::ImageMissing => "image-missing",
            ServiceState::Stopped => "stopped",
            ServiceState::Running => "running",
        };
        write!(f, "{}", label)
    }
}

/// A tool that can build, start and report on a named service.
///
/// Production code uses [`DockerCompose`](super::DockerCompose); tests
/// provide their own implementation that records calls.
pub trait ServiceManager {
    /// The stable service name.
    fn name(&self) -> &str;

    /// Checks that must pass before any other method is called.
    fn prerequisites(&self) -> Vec<Prerequisite>;

    /// Whether a container with exactly this name is running.
    fn is_running(&mut self) -> bool;

    /// Whether a container with exactly this name exists in any state.
    fn exists(&mut self) -> bool;

    /// Best-effort hint that the images are available.
    fn images_exist(&mut self) -> bool;

    /// Build the images, streaming output to the user.
    fn build(&mut self) -> Result<()>;

    /// Ask the manager to start the service. Does not wait for readiness.
    fn start(&mut self) -> Result<()>;

    /// Full argv that runs `command` inside the service.
    fn exec_command(&self, command: &[String]) -> Vec<String>;

    /// Classify the current state.
    fn state(&mut self) -> ServiceState {
        if self.is_running() {
            ServiceState::Running
        } else if !self.images_exist() {
            ServiceState::ImageMissing
        } else if self.exists() {
            ServiceState::Stopped
        } else {
            ServiceState::Absent
        }
    }
}
