//! Running the child to completion.

use crate::error::{LauncherError, Result};
use std::io;
use std::process::Child;
use std::sync::mpsc::{self, Sender};
use std::thread;

use super::child::ChildSpec;
use super::exit::ChildExit;
use super::relay::{relay_until_exit, BridgeEvent, PidTarget};
use super::signals::install_relay_handlers;

/// Runs a [`ChildSpec`] and reports how it ended.
///
/// Production code uses [`SystemSpawner`]; tests substitute a recorder so
/// launcher sequencing can be checked without starting processes.
pub trait ProcessSpawner {
    /// Run the child until it exits.
    fn run(&mut self, spec: &ChildSpec) -> Result<ChildExit>;
}

/// Spawns real processes and relays SIGINT/SIGTERM to them.
#[derive(Debug, Default)]
pub struct SystemSpawner;

impl SystemSpawner {
    /// Create a spawner.
    pub fn new() -> Self {
        Self
    }
}

impl ProcessSpawner for SystemSpawner {
    fn run(&mut self, spec: &ChildSpec) -> Result<ChildExit> {
        let (tx, rx) = mpsc::channel();

        // Installed before spawn so no request is lost between the two.
        let _handlers = install_relay_handlers(tx.clone())?;
        let waiter = spawn_waiter(tx)?;

        tracing::debug!(argv = ?spec.argv(), cwd = %spec.cwd.display(), "spawning child");
        let child = spec
            .command()
            .spawn()
            .map_err(|source| LauncherError::SpawnFailed {
                program: spec.program.clone(),
                source,
            })?;

        let target = hand_off(child, &waiter)?;
        relay_until_exit(&target, &rx)
    }
}

/// Start the thread that waits on the child it is handed.
///
/// The thread exits quietly if no child ever arrives.
fn spawn_waiter(events: Sender<BridgeEvent>) -> io::Result<Sender<Child>> {
    let (tx, rx) = mpsc::channel::<Child>();
    thread::Builder::new()
        .name("child-wait".to_string())
        .spawn(move || {
            let Ok(mut child) = rx.recv() else {
                return;
            };
            let event = match child.wait() {
                Ok(status) => BridgeEvent::Exited(ChildExit::from(status)),
                Err(e) => BridgeEvent::WaitFailed(e),
            };
            let _ = events.send(event);
        })?;
    Ok(tx)
}

/// Give `child` to the waiter. If the waiter is gone, kill and reap the
/// child here instead of leaving it running.
fn hand_off(child: Child, waiter: &Sender<Child>) -> Result<PidTarget> {
    let target = PidTarget::new(child.id());
    if let Err(mpsc::SendError(mut child)) = waiter.send(child) {
        let _ = child.kill();
        let _ = child.wait();
        return Err(anyhow::anyhow!("child waiter exited early").into());
    }
    Ok(target)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use nix::errno::Errno;
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;
    use std::process::Command;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn sh(script: &str, cwd: &std::path::Path) -> ChildSpec {
        ChildSpec::new("sh", cwd).args(["-c", script])
    }

    #[test]
    fn exit_code_passes_through() {
        let temp = TempDir::new().unwrap();
        let exit = SystemSpawner::new().run(&sh("exit 7", temp.path())).unwrap();
        assert_eq!(exit, ChildExit::Exited(7));
        assert_eq!(exit.exit_code(), 7);
    }

    #[test]
    fn runs_in_requested_directory() {
        let temp = TempDir::new().unwrap();
        let spec = sh("pwd > where.txt", temp.path());
        SystemSpawner::new().run(&spec).unwrap();

        let recorded = std::fs::read_to_string(temp.path().join("where.txt")).unwrap();
        let expected = temp.path().canonicalize().unwrap();
        assert_eq!(
            std::path::Path::new(recorded.trim()).canonicalize().unwrap(),
            expected
        );
    }

    #[test]
    fn signal_death_maps_to_failure() {
        let temp = TempDir::new().unwrap();
        let exit = SystemSpawner::new()
            .run(&sh("kill -9 $$", temp.path()))
            .unwrap();
        assert_eq!(exit, ChildExit::Signaled(Some(Signal::SIGKILL as i32)));
        assert_eq!(exit.exit_code(), 1);
    }

    #[test]
    fn missing_program_is_spawn_failure() {
        let temp = TempDir::new().unwrap();
        let spec = ChildSpec::new("/definitely/not/a/program", temp.path());
        let err = SystemSpawner::new().run(&spec).unwrap_err();
        assert!(matches!(err, LauncherError::SpawnFailed { .. }));
    }

    #[test]
    fn child_is_reaped_when_waiter_is_gone() {
        let (waiter, gone) = mpsc::channel::<Child>();
        drop(gone);

        let child = Command::new("sleep").arg("5").spawn().unwrap();
        let pid = Pid::from_raw(child.id() as i32);
        let started = Instant::now();

        assert!(hand_off(child, &waiter).is_err());
        assert!(started.elapsed() < Duration::from_secs(5));
        // Killed and waited on, so nothing is left under that pid.
        assert_eq!(kill(pid, None::<Signal>), Err(Errno::ESRCH));
    }

    #[test]
    fn waiter_without_child_sends_nothing() {
        let (tx, rx) = mpsc::channel();
        drop(spawn_waiter(tx).unwrap());
        assert!(rx.recv_timeout(Duration::from_secs(5)).is_err());
    }
}
