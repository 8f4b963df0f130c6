//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing to the real stdout and stderr
//! - [`MockUI`] capturing output for tests
//! - [`GofishTheme`] styles shared with the report formatters
//!
//! Diagnostics output goes to stdout; the issue report and errors go to
//! stderr, so `gofish --checks | grep ...` only ever sees diagnostics.
//!
//! # Example
//!
//! ```
//! use gofish::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.report("gofmt: main.go: File needs formatting\n");
//! assert_eq!(ui.reports(), ["gofmt: main.go: File needs formatting\n"]);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, GofishTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Styles to format output with.
    fn theme(&self) -> &GofishTheme;

    /// Write a preformatted block to stdout, as is.
    fn output(&mut self, text: &str);

    /// Write a preformatted report block to stderr, as is.
    fn report(&mut self, text: &str);

    /// Display a warning on stderr.
    fn warning(&mut self, msg: &str);

    /// Display an error on stderr.
    fn error(&mut self, msg: &str);
}
