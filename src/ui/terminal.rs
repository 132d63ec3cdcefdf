//! Stderr-backed user interface.

use console::Term;

use super::spinner::ProgressSpinner;
use super::theme::{should_use_colors, LauncherTheme};
use super::{SpinnerHandle, UserInterface};

/// Writes diagnostics to stderr.
///
/// In quiet mode only warnings, errors and hints are shown.
pub struct StderrUI {
    term: Term,
    theme: LauncherTheme,
    quiet: bool,
}

impl StderrUI {
    /// Create a UI, picking colors from the environment.
    pub fn new(quiet: bool) -> Self {
        let theme = if should_use_colors() {
            LauncherTheme::new()
        } else {
            LauncherTheme::plain()
        };
        Self::with_theme(theme, quiet)
    }

    /// Create a UI with an explicit theme.
    pub fn with_theme(theme: LauncherTheme, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            theme,
            quiet,
        }
    }

    fn write(&self, line: &str) {
        // Diagnostics are best effort; a closed stderr must not abort the launch.
        let _ = self.term.write_line(line);
    }
}

impl UserInterface for StderrUI {
    fn message(&mut self, msg: &str) {
        if !self.quiet {
            self.write(&self.theme.format_info(msg));
        }
    }

    fn success(&mut self, msg: &str) {
        if !self.quiet {
            self.write(&self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        self.write(&self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        self.write(&self.theme.format_error(msg));
    }

    fn hint(&mut self, hint: &str) {
        self.write(&self.theme.format_hint(hint));
    }

    fn start_spinner(&mut self, msg: &str) -> Box<dyn SpinnerHandle> {
        if self.quiet || !self.term.is_term() {
            self.message(msg);
            Box::new(ProgressSpinner::hidden(self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::new(msg, self.theme.clone()))
        }
    }
}
