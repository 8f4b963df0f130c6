//! Checks: the pluggable unit of work.
//!
//! This module provides the check contract and its supporting pieces:
//!
//! - **Checks** - One external tool each ([`Check`] trait)
//! - **Registry** - Ordered collection of checks for a run ([`CheckRegistry`])
//! - **Issues** - Normalized findings ([`Issue`])
//! - **Process** - Running a tool and capturing its output ([`process`])
//! - **Builtins** - The adapters shipped with gofish ([`builtin`])
//!
//! # Example
//!
//! ```
//! use gofish::checks::{CheckRegistry, Issue};
//!
//! let registry = CheckRegistry::with_builtins();
//! assert!(registry.get("gofmt").is_some());
//!
//! let issue = Issue::from_line("main.go:3:1: unused variable x").unwrap();
//! assert_eq!(issue.file, "main.go:3:1");
//! assert_eq!(issue.message, "unused variable x");
//! ```

pub mod builtin;
pub mod issue;
pub mod process;
pub mod registry;

pub use issue::Issue;
pub use process::{run_tool, ToolCommand, ToolOutput};
pub use registry::CheckRegistry;

use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::requirements::Unmet;

/// Whether a check may run in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applicability {
    /// Every requirement holds.
    Ready,
    /// The first requirement that failed.
    NotApplicable(Unmet),
}

impl Applicability {
    /// Whether the check should be executed.
    pub fn is_ready(&self) -> bool {
        matches!(self, Applicability::Ready)
    }

    /// The reason the check does not apply, if any.
    pub fn reason(&self) -> Option<&Unmet> {
        match self {
            Applicability::Ready => None,
            Applicability::NotApplicable(unmet) => Some(unmet),
        }
    }
}

impl From<std::result::Result<(), Unmet>> for Applicability {
    fn from(result: std::result::Result<(), Unmet>) -> Self {
        match result {
            Ok(()) => Applicability::Ready,
            Err(unmet) => Applicability::NotApplicable(unmet),
        }
    }
}

/// Settings shared by every check execution in a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecContext {
    /// Kill a tool that runs longer than this.
    pub timeout: Option<Duration>,
}

/// A quality check backed by one external tool.
///
/// Checks hold only configuration fixed at construction, so the same check
/// can be evaluated for many directories, from many threads.
pub trait Check: Send + Sync {
    /// Display name, unique within a registry (e.g. `npm-prettier`).
    fn name(&self) -> &str;

    /// Evaluate this check's requirements for a directory.
    ///
    /// Only inspects the filesystem, the search path and the environment.
    fn applicability(&self, dir: &Path) -> Applicability;

    /// Run the tool in `dir` and translate its output into issues.
    ///
    /// An `Err` is an infrastructure failure (the tool could not be run or its
    /// output not understood), never a finding.
    fn execute(&self, dir: &Path, ctx: &ExecContext) -> Result<Vec<Issue>>;
}
