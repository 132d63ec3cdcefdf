//! Progress spinner shown while waiting on the backing service.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use super::theme::LauncherTheme;
use super::SpinnerHandle;

/// A stderr spinner for long-running waits.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: LauncherTheme,
    hidden: bool,
}

impl ProgressSpinner {
    /// Create and start a spinner with a message.
    pub fn new(message: &str, theme: LauncherTheme) -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            theme,
            hidden: false,
        }
    }

    /// Create a spinner that doesn't draw (non-TTY or quiet mode).
    ///
    /// The final success/error line is still printed.
    pub fn hidden(theme: LauncherTheme) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme,
            hidden: true,
        }
    }

    fn finish(&mut self, line: String) {
        if self.hidden {
            eprintln!("{}", line);
            return;
        }
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish(line);
    }
}
