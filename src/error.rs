//! Error types for gofish operations.
//!
//! This module defines [`GofishError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A requirement that does not hold is not an error: it is an
//!   [`Unmet`](crate::requirements::Unmet) and only means a check is skipped
//! - Findings reported by a tool are [`Issue`](crate::checks::Issue)s, never errors
//! - Everything in this enum is an infrastructure failure and ends the run

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for gofish operations.
#[derive(Debug, Error)]
pub enum GofishError {
    /// The external tool could not be started at all.
    #[error("failed to run {tool}: {message}")]
    ToolSpawn { tool: String, message: String },

    /// The tool reported its own failure rather than findings.
    #[error("{tool} exited with {}: {message}", exit_status(code))]
    ToolFailed {
        tool: String,
        code: Option<i32>,
        message: String,
    },

    /// The tool exited unsuccessfully without printing anything to explain why.
    #[error("{tool} exited with {} and produced no output", exit_status(code))]
    ToolSilentFailure { tool: String, code: Option<i32> },

    /// The tool ran longer than the configured timeout and was killed.
    #[error("{tool} timed out after {limit:?}")]
    ToolTimeout { tool: String, limit: Duration },

    /// The tool's output could not be read or decoded.
    #[error("failed to parse {tool} output: {message}")]
    OutputDecode { tool: String, message: String },

    /// A check failed in a specific directory. Wraps the underlying failure.
    #[error("{check} in {}: error: {source}", directory.display())]
    CheckFailed {
        check: String,
        directory: PathBuf,
        #[source]
        source: Box<GofishError>,
    },

    /// The scan root could not be walked.
    #[error("Error finding project directories in {}: {message}", path.display())]
    Discovery { path: PathBuf, message: String },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {}: {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GofishError {
    /// Attach check and directory context to an execution failure.
    pub fn in_check(self, check: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        GofishError::CheckFailed {
            check: check.into(),
            directory: directory.into(),
            source: Box::new(self),
        }
    }
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

/// Result type alias for gofish operations.
pub type Result<T> = std::result::Result<T, GofishError>;
