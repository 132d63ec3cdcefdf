//! The process bridge: runs the target with inherited stdio and relays
//! termination requests to it.
//!
//! - [`child`] - [`ChildSpec`], the resolved invocation
//! - [`env`] - Environment overrides and caller-wins defaults
//! - [`exit`] - Mapping child termination to the launcher's status
//! - [`relay`] - Forwarding signals until the child exits
//! - [`signals`] - Capturing SIGINT/SIGTERM on the launcher
//! - [`spawn`] - The [`ProcessSpawner`] seam

pub mod child;
pub mod env;
pub mod exit;
pub mod relay;
pub mod signals;
pub mod spawn;

pub use child::ChildSpec;
pub use env::ChildEnv;
pub use exit::ChildExit;
pub use relay::{relay_until_exit, BridgeEvent, PidTarget, RelaySignal, SignalTarget};
pub use spawn::{ProcessSpawner, SystemSpawner};
