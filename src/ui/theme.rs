//! Visual theme and styling.

use console::Style;

/// Styles for launcher diagnostics.
#[derive(Debug, Clone)]
pub struct LauncherTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for progress messages (magenta).
    pub info: Style,
    /// Style for remediation hints (dim).
    pub hint: Style,
}

impl Default for LauncherTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LauncherTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().for_stderr().green(),
            warning: Style::new().for_stderr().color256(208),
            error: Style::new().for_stderr().red().bold(),
            info: Style::new().for_stderr().magenta(),
            hint: Style::new().for_stderr().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a progress message.
    pub fn format_info(&self, msg: &str) -> String {
        format!("{}", self.info.apply_to(format!("◆ {}", msg)))
    }

    /// Format a multi-line hint, indenting every line.
    pub fn format_hint(&self, hint: &str) -> String {
        hint.lines()
            .map(|line| format!("  {}", self.hint.apply_to(line)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Check if colors should be enabled.
///
/// Diagnostics go to stderr, so that is the stream whose TTY-ness matters.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}
