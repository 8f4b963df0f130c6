//! Terminal UI writing to the process's standard streams.

use std::io::Write;

use super::theme::GofishTheme;
use super::UserInterface;

/// UI implementation for the real terminal.
pub struct TerminalUI {
    theme: GofishTheme,
}

impl TerminalUI {
    /// Create a terminal UI, colored or plain.
    pub fn new(use_colors: bool) -> Self {
        Self {
            theme: GofishTheme::for_colors(use_colors),
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new(super::should_use_colors())
    }
}

impl UserInterface for TerminalUI {
    fn theme(&self) -> &GofishTheme {
        &self.theme
    }

    fn output(&mut self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
            tracing::debug!("Failed to write to stdout: {}", e);
        }
    }

    fn report(&mut self, text: &str) {
        let mut stderr = std::io::stderr().lock();
        if let Err(e) = stderr.write_all(text.as_bytes()).and_then(|_| stderr.flush()) {
            tracing::debug!("Failed to write to stderr: {}", e);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.error.apply_to(msg));
    }
}
