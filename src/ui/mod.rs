//! User-facing diagnostics.
//!
//! Everything the launcher says goes to stderr: stdout is inherited by the
//! child and carries its protocol.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`StderrUI`] for real terminals and pipes
//! - [`MockUI`] for capturing output in tests
//! - [`hints`] for remediation text
//!
//! # Example
//!
//! ```
//! use doclaunch::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Starting service...");
//! ui.error("Docker daemon is not running");
//!
//! assert_eq!(ui.messages(), ["Starting service..."]);
//! assert_eq!(ui.errors(), ["Docker daemon is not running"]);
//! ```

pub mod hints;
pub mod mock;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use spinner::ProgressSpinner;
pub use terminal::StderrUI;
pub use theme::{should_use_colors, LauncherTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a progress message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Never suppressed.
    fn error(&mut self, msg: &str);

    /// Display a remediation hint under the previous message.
    fn hint(&mut self, hint: &str);

    /// Start a spinner for a wait of unknown length.
    fn start_spinner(&mut self, msg: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle to a running spinner.
pub trait SpinnerHandle {
    /// Update the message.
    fn set_message(&mut self, msg: &str);

    /// Stop with a success line.
    fn finish_success(&mut self, msg: &str);

    /// Stop with an error line.
    fn finish_error(&mut self, msg: &str);
}
