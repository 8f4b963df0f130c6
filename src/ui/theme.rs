//! Visual theme and styling.

use console::Style;

/// gofish's visual theme.
#[derive(Debug, Clone)]
pub struct GofishTheme {
    /// Style for ready checks (green).
    pub success: Style,
    /// Style for warnings (yellow).
    pub warning: Style,
    /// Style for errors and unmet requirements (red bold).
    pub error: Style,
    /// Style for headers (bold).
    pub header: Style,
    /// Style for check names (cyan).
    pub check: Style,
    /// Style for directories and secondary text (dim).
    pub dim: Style,
}

impl Default for GofishTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GofishTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
            check: Style::new().cyan(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            check: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(use_colors: bool) -> Self {
        if use_colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Reports go to stderr, so that is the stream that must be a TTY
    console::Term::stderr().is_term()
}
