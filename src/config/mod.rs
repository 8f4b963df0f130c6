//! Configuration loading for gofish.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use gofish::config::{load_config, ConfigOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".gofish.yml"), "exclude: [vendor]\njobs: 2").unwrap();
//!
//! let config = load_config(temp.path()).unwrap().with_overrides(&ConfigOverrides {
//!     jobs: Some(4),
//!     ..Default::default()
//! });
//! assert_eq!(config.exclude, vec!["vendor"]);
//! assert_eq!(config.effective_jobs(), 4);
//! ```
//!
//! # Configuration File Locations
//!
//! gofish reads `.gofish.yml` (or `.gofish.yaml`) from the scan root only.
//! Command-line flags are layered on top.

pub mod loader;
pub mod schema;

pub use loader::{find_config_file, load_config, load_config_file, parse_config, CONFIG_FILE_NAMES};
pub use schema::{ConfigOverrides, GofishConfig};
