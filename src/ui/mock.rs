//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.

use super::theme::GofishTheme;
use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug)]
pub struct MockUI {
    theme: GofishTheme,
    outputs: Vec<String>,
    reports: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    /// Create a new MockUI with a plain theme.
    pub fn new() -> Self {
        Self {
            theme: GofishTheme::plain(),
            outputs: Vec::new(),
            reports: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Get all captured stdout blocks.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Get all captured report blocks.
    pub fn reports(&self) -> &[String] {
        &self.reports
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Everything written to stdout, in order.
    pub fn stdout(&self) -> String {
        self.outputs.concat()
    }

    /// Everything written as a report, in order.
    pub fn stderr_report(&self) -> String {
        self.reports.concat()
    }
}

impl UserInterface for MockUI {
    fn theme(&self) -> &GofishTheme {
        &self.theme
    }

    fn output(&mut self, text: &str) {
        self.outputs.push(text.to_string());
    }

    fn report(&mut self, text: &str) {
        self.reports.push(text.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
