//! Aggregated run results and their output formats.
//!
//! A [`Report`] is the ordered list of every issue found in a run, each
//! tagged with the check and directory it came from. Formatters turn a
//! report (or a diagnostics pass) into text; they are pure functions of
//! their input, so the same report always renders to the same bytes.

pub mod diagnostics;
pub mod human;
pub mod json;

pub use diagnostics::DiagnosticsFormatter;
pub use human::HumanFormatter;
pub use json::JsonFormatter;

use serde::Serialize;
use std::io::Write;

use crate::checks::Issue;
use crate::discovery::ProjectDir;

/// Exit status when no issues were found.
pub const EXIT_CLEAN: i32 = 0;
/// Exit status when the run could not complete.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status when issues were found.
pub const EXIT_ISSUES: i32 = 2;

/// Output format for the issue report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting a report.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;

    /// Format the report into a string.
    fn render(&self, report: &Report) -> std::io::Result<String> {
        let mut out = Vec::new();
        self.format(report, &mut out)?;
        String::from_utf8(out)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

/// An issue together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Name of the check that reported the issue.
    pub check: String,
    /// Directory the check ran in, relative to the scan root (`.` for the root).
    pub directory: String,
    /// The issue, untouched.
    #[serde(flatten)]
    pub issue: Issue,
}

impl ReportEntry {
    pub fn new(check: impl Into<String>, dir: &ProjectDir, issue: Issue) -> Self {
        Self {
            check: check.into(),
            directory: dir.display_name(),
            issue,
        }
    }

    /// Whether the issue was found in the scan root.
    pub fn in_root(&self) -> bool {
        self.directory == "."
    }
}

/// Every issue from a run, in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new(entries: Vec<ReportEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Process exit status for this report.
    pub fn exit_code(&self) -> i32 {
        if self.is_empty() {
            EXIT_CLEAN
        } else {
            EXIT_ISSUES
        }
    }
}
