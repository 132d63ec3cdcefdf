//! Launcher-side signal capture.
//!
//! On Unix, SIGINT and SIGTERM are registered with `signal-hook`; a reader
//! thread turns each delivery into a [`BridgeEvent::Signal`].

use std::io;
use std::sync::mpsc::Sender;

use super::relay::BridgeEvent;

/// Keeps the capture thread alive; dropping it stops the thread.
pub struct RelayHandlers {
    #[cfg(unix)]
    handle: signal_hook::iterator::Handle,
}

impl Drop for RelayHandlers {
    fn drop(&mut self) {
        #[cfg(unix)]
        self.handle.close();
    }
}

/// Start capturing SIGINT/SIGTERM into `events`.
///
/// While installed, those signals no longer terminate the launcher; the
/// relay decides when to exit. A no-op on platforms without Unix signals.
#[cfg(unix)]
pub fn install_relay_handlers(events: Sender<BridgeEvent>) -> io::Result<RelayHandlers> {
    use super::relay::RelaySignal;
    use signal_hook::iterator::Signals;
    use std::thread;

    let mut signals = Signals::new(RelaySignal::ALL.map(|s| s.as_signal() as i32))?;
    let handle = signals.handle();

    thread::Builder::new()
        .name("signal-relay".to_string())
        .spawn(move || {
            for raw in signals.forever() {
                let Some(signal) = RelaySignal::from_raw(raw) else {
                    continue;
                };
                if events.send(BridgeEvent::Signal(signal)).is_err() {
                    break;
                }
            }
        })?;

    Ok(RelayHandlers { handle })
}

#[cfg(not(unix))]
pub fn install_relay_handlers(_events: Sender<BridgeEvent>) -> io::Result<RelayHandlers> {
    Ok(RelayHandlers {})
}
