//! Backing service provisioning.
//!
//! - [`service`] - The [`ServiceManager`] seam and [`ServiceState`]
//! - [`docker`] - Docker Compose implementation
//! - [`provisioner`] - Build/start sequencing and the bounded readiness poll

pub mod docker;
pub mod provisioner;
pub mod service;

pub use docker::DockerCompose;
pub use provisioner::{PollPolicy, ProvisionOutcome, Provisioner};
pub use service::{ServiceManager, ServiceState};
