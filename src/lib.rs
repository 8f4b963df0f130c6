//! gofish - Run the right code quality checks in every project of a tree.
//!
//! gofish finds project directories (anything with a `go.mod` or
//! `package.json`), works out which checks apply to each one, runs those
//! checks and folds their findings into a single report. It never analyses
//! code itself; every check wraps an existing tool.
//!
//! # Modules
//!
//! - [`checks`] - The check contract, registry and built-in adapters
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.gofish.yml` loading
//! - [`discovery`] - Finding project directories
//! - [`error`] - Error types and result aliases
//! - [`orchestrator`] - Running checks across directories
//! - [`report`] - Aggregated results and output formats
//! - [`requirements`] - Preconditions that gate checks
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use gofish::checks::CheckRegistry;
//! use gofish::discovery::{discover, DiscoveryOptions};
//! use gofish::orchestrator::Orchestrator;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let dirs = discover(temp.path(), &DiscoveryOptions::default()).unwrap();
//! let registry = CheckRegistry::with_builtins();
//!
//! let report = Orchestrator::new(&registry).run(&dirs).unwrap();
//! assert_eq!(report.exit_code(), 0);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod orchestrator;
pub mod report;
pub mod requirements;
pub mod ui;

pub use error::{GofishError, Result};
