//! Signal relay between the launcher and its child.
//!
//! Both launch modes go through [`relay_until_exit`]: every interrupt or
//! terminate request the launcher receives is forwarded to the child, and
//! the launcher only finishes once the child has actually exited.

use crate::error::{LauncherError, Result};
use std::io;
use std::sync::mpsc::Receiver;

use super::exit::ChildExit;

#[cfg(unix)]
use nix::{
    errno::Errno,
    sys::signal::{kill, Signal},
    unistd::Pid,
};

/// Termination requests the launcher forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaySignal {
    /// SIGINT.
    Interrupt,
    /// SIGTERM.
    Terminate,
}

impl RelaySignal {
    /// Every signal the launcher relays.
    pub const ALL: [RelaySignal; 2] = [RelaySignal::Interrupt, RelaySignal::Terminate];

    /// The matching Unix signal.
    #[cfg(unix)]
    pub fn as_signal(self) -> Signal {
        match self {
            RelaySignal::Interrupt => Signal::SIGINT,
            RelaySignal::Terminate => Signal::SIGTERM,
        }
    }

    /// Map a raw signal number back, if it is one we relay.
    #[cfg(unix)]
    pub fn from_raw(raw: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_signal() as i32 == raw)
    }
}

/// Something that happened while the child was running.
#[derive(Debug)]
pub enum BridgeEvent {
    /// The launcher received a termination request.
    Signal(RelaySignal),
    /// The child exited.
    Exited(ChildExit),
    /// Waiting on the child failed.
    WaitFailed(io::Error),
}

/// Where relayed signals are delivered.
///
/// Production code uses [`PidTarget`]; tests substitute a recorder.
pub trait SignalTarget {
    /// Deliver `signal` to the child.
    fn deliver(&self, signal: RelaySignal) -> io::Result<()>;
}

/// Delivers signals to a process id.
#[derive(Debug, Clone, Copy)]
pub struct PidTarget {
    pid: u32,
}

impl PidTarget {
    /// Target the process with this id.
    pub fn new(pid: u32) -> Self {
        Self { pid }
    }
}

impl SignalTarget for PidTarget {
    #[cfg(unix)]
    fn deliver(&self, signal: RelaySignal) -> io::Result<()> {
        let pid = i32::try_from(self.pid)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "pid out of range"))?;
        match kill(Pid::from_raw(pid), signal.as_signal()) {
            // Already gone: its exit event is on the way.
            Ok(()) | Err(Errno::ESRCH) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    #[cfg(not(unix))]
    fn deliver(&self, signal: RelaySignal) -> io::Result<()> {
        // Console control events already reach every process attached to the console.
        tracing::debug!(pid = self.pid, ?signal, "signal relay not supported on this platform");
        Ok(())
    }
}

/// Forward signals to `target` until the child's exit arrives on `events`.
pub fn relay_until_exit(
    target: &dyn SignalTarget,
    events: &Receiver<BridgeEvent>,
) -> Result<ChildExit> {
    for event in events {
        match event {
            BridgeEvent::Signal(signal) => {
                tracing::debug!(?signal, "relaying signal to child");
                if let Err(e) = target.deliver(signal) {
                    tracing::warn!(?signal, error = %e, "failed to relay signal");
                }
            }
            BridgeEvent::Exited(exit) => {
                tracing::debug!(%exit, "child finished");
                return Ok(exit);
            }
            BridgeEvent::WaitFailed(e) => return Err(LauncherError::Io(e)),
        }
    }
    Err(LauncherError::Other(anyhow::anyhow!(
        "lost track of the child process before it exited"
    )))
}
