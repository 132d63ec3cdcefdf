//! Build-then-start sequencing with a bounded readiness wait.

use crate::error::{LauncherError, Result};
use crate::ui::UserInterface;
use std::thread;
use std::time::{Duration, Instant};

use super::service::{ServiceManager, ServiceState};

/// How readiness is polled after a start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay between status queries.
    pub interval: Duration,
    /// Maximum number of status queries.
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: 30,
        }
    }
}

/// What [`Provisioner::ensure_running`] had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// Nothing; the service was already up.
    AlreadyRunning,
    /// The service was started (and built first if `built`).
    Started { built: bool, attempts: u32 },
}

/// Drives a [`ServiceManager`] to the running state.
pub struct Provisioner<'a> {
    manager: &'a mut dyn ServiceManager,
    policy: PollPolicy,
}

impl<'a> Provisioner<'a> {
    /// Create a provisioner for `manager`.
    pub fn new(manager: &'a mut dyn ServiceManager, policy: PollPolicy) -> Self {
        Self { manager, policy }
    }

    /// Bring the service up if it isn't already.
    ///
    /// No step is retried: a failed build or start, or a service that never
    /// reports running, ends provisioning.
    pub fn ensure_running(&mut self, ui: &mut dyn UserInterface) -> Result<ProvisionOutcome> {
        let state = self.manager.state();
        tracing::debug!(service = %self.manager.name(), %state, "service state");

        if state == ServiceState::Running {
            return Ok(ProvisionOutcome::AlreadyRunning);
        }

        let built = state.needs_build();
        if built {
            ui.message("Docker images not found. Building images...");
            self.manager.build()?;
        }

        ui.message("Starting Docker containers...");
        self.manager.start()?;

        let attempts = self.wait_until_running(ui)?;
        Ok(ProvisionOutcome::Started { built, attempts })
    }

    /// Poll until the service reports running.
    ///
    /// Makes at most `max_attempts` status queries, sleeping `interval`
    /// between them against a monotonic deadline. Returns the number of
    /// queries made.
    pub fn wait_until_running(&mut self, ui: &mut dyn UserInterface) -> Result<u32> {
        let name = self.manager.name().to_string();
        let mut spinner = ui.start_spinner(&format!("Waiting for {} to start", name));
        let started = Instant::now();

        for attempt in 1..=self.policy.max_attempts {
            if self.manager.is_running() {
                tracing::debug!(service = %name, attempt, "service is running");
                spinner.finish_success(&format!("{} is running", name));
                return Ok(attempt);
            }

            if attempt < self.policy.max_attempts {
                spinner.set_message(&format!(
                    "Waiting for {} to start ({}/{})",
                    name, attempt, self.policy.max_attempts
                ));
                sleep_until(started + self.policy.interval * attempt);
            }
        }

        spinner.finish_error(&format!("{} did not start", name));
        Err(LauncherError::ProvisionTimeout {
            service: name,
            attempts: self.policy.max_attempts,
        })
    }
}

/// Block the thread until `deadline`; returns at once if it has passed.
fn sleep_until(deadline: Instant) {
    let now = Instant::now();
    if deadline > now {
        thread::sleep(deadline - now);
    }
}
