//! Diagnostics (`--checks`) formatter.

use crate::checks::Applicability;
use crate::orchestrator::DirectoryStatus;
use crate::ui::GofishTheme;
use std::io::Write;

/// Lists every check's applicability in every directory.
pub struct DiagnosticsFormatter {
    theme: GofishTheme,
}

impl DiagnosticsFormatter {
    pub fn new(theme: GofishTheme) -> Self {
        Self { theme }
    }

    /// Format the statuses to the given writer.
    pub fn format<W: Write>(
        &self,
        statuses: &[DirectoryStatus],
        writer: &mut W,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", self.theme.header.apply_to("Available checks:"))?;
        writeln!(writer)?;

        for status in statuses {
            writeln!(writer, "Directory: {}", status.directory.display_name())?;
            for check in &status.checks {
                let line = match &check.applicability {
                    Applicability::Ready => {
                        self.theme.format_success(&format!("{}: ready to run", check.check))
                    }
                    Applicability::NotApplicable(reason) => {
                        self.theme.format_error(&format!("{}: {}", check.check, reason))
                    }
                };
                writeln!(writer, "  {}", line)?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }

    /// Format the statuses into a string.
    pub fn render(&self, statuses: &[DirectoryStatus]) -> std::io::Result<String> {
        let mut out = Vec::new();
        self.format(statuses, &mut out)?;
        String::from_utf8(out)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

impl Default for DiagnosticsFormatter {
    fn default() -> Self {
        Self::new(GofishTheme::plain())
    }
}
