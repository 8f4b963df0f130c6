//! JSON report formatter.
//!
//! Emits the report as a JSON array of `{check, directory, file, message}`
//! objects for tooling integration. An empty report is `[]`.

use super::{Report, ReportFormatter};
use std::io::Write;

/// Formats the report as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report.entries())?;
        writeln!(writer)
    }
}
