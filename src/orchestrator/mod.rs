//! Run orchestration and aggregation.
//!
//! The [`Orchestrator`] evaluates every (directory, check) pair: checks that
//! are not applicable are skipped, applicable ones are executed, and their
//! issues are tagged with the check name and directory. The first
//! infrastructure failure aborts the run with no report.
//!
//! Pairs are processed in canonical order (directories in discovery order,
//! checks in registration order). With more than one job the pairs run on a
//! bounded pool of worker threads, and results are put back into canonical
//! order before the report is built, so output never depends on scheduling.
//!
//! # Example
//!
//! ```
//! use gofish::checks::CheckRegistry;
//! use gofish::discovery::ProjectDir;
//! use gofish::orchestrator::Orchestrator;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let registry = CheckRegistry::with_builtins();
//! let dirs = vec![ProjectDir::root(temp.path())];
//!
//! // No markers, so no built-in check applies.
//! let report = Orchestrator::new(&registry).run(&dirs).unwrap();
//! assert!(report.is_empty());
//! ```

mod pool;

use std::time::Duration;

use crate::checks::{Applicability, Check, CheckRegistry, ExecContext};
use crate::discovery::ProjectDir;
use crate::error::Result;
use crate::report::{Report, ReportEntry};

/// Knobs for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Maximum number of pairs evaluated at once; 1 runs sequentially.
    pub jobs: usize,
    /// Per-tool timeout.
    pub timeout: Option<Duration>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            jobs: 1,
            timeout: None,
        }
    }
}

/// Applicability of one check in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckStatus {
    pub check: String,
    pub applicability: Applicability,
}

/// Applicability of every check in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStatus {
    pub directory: ProjectDir,
    pub checks: Vec<CheckStatus>,
}

/// Runs registered checks across project directories.
///
/// Holds the registry by shared reference for the whole run, so the set of
/// checks cannot change while pairs are being evaluated.
pub struct Orchestrator<'a> {
    registry: &'a CheckRegistry,
    options: RunOptions,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator with default options.
    pub fn new(registry: &'a CheckRegistry) -> Self {
        Self {
            registry,
            options: RunOptions::default(),
        }
    }

    /// Replace the run options.
    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Run every applicable check in every directory and aggregate the issues.
    ///
    /// Fails with [`GofishError::CheckFailed`](crate::error::GofishError::CheckFailed)
    /// on the first infrastructure error.
    pub fn run(&self, dirs: &[ProjectDir]) -> Result<Report> {
        tracing::info!(
            "Evaluating {} check(s) in {} director{}",
            self.registry.len(),
            dirs.len(),
            if dirs.len() == 1 { "y" } else { "ies" }
        );

        let pairs: Vec<(&ProjectDir, &dyn Check)> = dirs
            .iter()
            .flat_map(|dir| self.registry.iter().map(move |check| (dir, check)))
            .collect();

        let entries = if self.options.jobs > 1 && pairs.len() > 1 {
            pool::run_parallel(&pairs, self.options.jobs, |dir, check| {
                self.evaluate(dir, check)
            })?
        } else {
            let mut entries = Vec::new();
            for (dir, check) in &pairs {
                entries.extend(self.evaluate(*dir, *check)?);
            }
            entries
        };

        Ok(Report::new(entries))
    }

    /// Report each check's applicability in each directory without running anything.
    pub fn diagnose(&self, dirs: &[ProjectDir]) -> Vec<DirectoryStatus> {
        dirs.iter()
            .map(|dir| DirectoryStatus {
                directory: dir.clone(),
                checks: self
                    .registry
                    .iter()
                    .map(|check| CheckStatus {
                        check: check.name().to_string(),
                        applicability: check.applicability(&dir.path),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Evaluate a single pair: gate, execute, tag.
    fn evaluate(&self, dir: &ProjectDir, check: &dyn Check) -> Result<Vec<ReportEntry>> {
        if let Applicability::NotApplicable(reason) = check.applicability(&dir.path) {
            tracing::debug!(
                "Skipping {} in {}: {}",
                check.name(),
                dir.display_name(),
                reason
            );
            return Ok(Vec::new());
        }

        tracing::info!("Running {} in {}", check.name(), dir.display_name());
        let ctx = ExecContext {
            timeout: self.options.timeout,
        };
        let issues = check
            .execute(&dir.path, &ctx)
            .map_err(|e| e.in_check(check.name(), &dir.relative))?;

        tracing::debug!(
            "{} in {} reported {} issue(s)",
            check.name(),
            dir.display_name(),
            issues.len()
        );

        Ok(issues
            .into_iter()
            .map(|issue| ReportEntry::new(check.name(), dir, issue))
            .collect())
    }
}
