//! Human-readable report formatter.

use super::{Report, ReportFormatter};
use crate::ui::GofishTheme;
use std::io::Write;

/// First line of a non-empty report.
pub const REPORT_HEADER: &str =
    "The following issues were detected by gofish, please address them:";

/// Formats the report for terminal display.
pub struct HumanFormatter {
    theme: GofishTheme,
}

impl HumanFormatter {
    pub fn new(theme: GofishTheme) -> Self {
        Self { theme }
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new(GofishTheme::plain())
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        if report.is_empty() {
            return Ok(());
        }

        writeln!(writer, "{}", self.theme.header.apply_to(REPORT_HEADER))?;
        writeln!(writer)?;

        for entry in report.entries() {
            let check = self.theme.check.apply_to(&entry.check);
            if entry.in_root() {
                writeln!(writer, "{}: {}", check, entry.issue)?;
            } else {
                writeln!(writer, "{} in {}: {}", check, entry.directory, entry.issue)?;
            }
        }

        Ok(())
    }
}
