//! Child termination and the launcher exit status it maps to.

use crate::error::FAILURE_EXIT_CODE;
use std::process::ExitStatus;

/// How the child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    /// Normal exit with a status code.
    Exited(i32),
    /// Terminated by a signal (number, where the platform reports one).
    Signaled(Option<i32>),
}

impl ChildExit {
    /// The launcher's own exit status.
    ///
    /// Exit codes pass through unchanged. Signal deaths map to the fixed
    /// failure status; the signal is not re-raised on the launcher.
    pub fn exit_code(&self) -> u8 {
        match self {
            ChildExit::Exited(code) => u8::try_from(*code).unwrap_or(FAILURE_EXIT_CODE),
            ChildExit::Signaled(_) => FAILURE_EXIT_CODE,
        }
    }
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ChildExit::Exited(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            ChildExit::Signaled(status.signal())
        }
        #[cfg(not(unix))]
        {
            ChildExit::Signaled(None)
        }
    }
}

impl std::fmt::Display for ChildExit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChildExit::Exited(code) => write!(f, "exited with code {}", code),
            ChildExit::Signaled(Some(signal)) => write!(f, "terminated by signal {}", signal),
            ChildExit::Signaled(None) => write!(f, "terminated by signal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_maps_to_zero() {
        assert_eq!(ChildExit::Exited(0).exit_code(), 0);
    }

    #[test]
    fn nonzero_codes_pass_through() {
        for code in [1, 2, 42, 127, 255] {
            assert_eq!(ChildExit::Exited(code).exit_code(), code as u8);
        }
    }

    #[test]
    fn signal_maps_to_fixed_failure() {
        assert_eq!(ChildExit::Signaled(Some(9)).exit_code(), 1);
        assert_eq!(ChildExit::Signaled(Some(15)).exit_code(), 1);
        assert_eq!(ChildExit::Signaled(None).exit_code(), 1);
    }

    #[test]
    fn out_of_range_codes_map_to_failure() {
        assert_eq!(ChildExit::Exited(-1).exit_code(), 1);
        assert_eq!(ChildExit::Exited(256).exit_code(), 1);
    }

    #[test]
    #[cfg(unix)]
    fn from_exit_status() {
        use std::os::unix::process::ExitStatusExt;

        // Wait status encoding: code in the high byte, signal in the low bits.
        assert_eq!(ChildExit::from(ExitStatus::from_raw(7 << 8)), ChildExit::Exited(7));
        assert_eq!(ChildExit::from(ExitStatus::from_raw(9)), ChildExit::Signaled(Some(9)));
    }

    #[test]
    fn display_is_readable() {
        assert_eq!(ChildExit::Exited(2).to_string(), "exited with code 2");
        assert_eq!(
            ChildExit::Signaled(Some(15)).to_string(),
            "terminated by signal 15"
        );
    }
}
