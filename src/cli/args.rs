//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::report::OutputFormat;

/// gofish - Run the right code quality checks in every project of a tree.
#[derive(Debug, Clone, Parser)]
#[command(name = "gofish")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan (defaults to the current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Show available checks and their status instead of running them
    #[arg(long)]
    pub checks: bool,

    /// Number of checks to run at once
    #[arg(short, long, env = "GOFISH_JOBS")]
    pub jobs: Option<usize>,

    /// Seconds a single tool may run before it is killed
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Checks to leave out (repeatable, comma-separated)
    #[arg(long, value_name = "NAME", value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Directory names to skip during discovery (repeatable, comma-separated)
    #[arg(long, value_name = "NAME", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The config values given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            exclude: trimmed(&self.exclude),
            skip: trimmed(&self.skip),
            jobs: self.jobs,
            timeout: self.timeout,
        }
    }
}

fn trimmed(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
