//! Configuration schema.
//!
//! ```yaml
//! # .gofish.yml
//! exclude:
//!   - vendor
//!   - dist
//! skip:
//!   - go test
//! jobs: 4
//! timeout: 300
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Contents of `.gofish.yml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GofishConfig {
    /// Extra directory names never descended into during discovery.
    pub exclude: Vec<String>,

    /// Check names removed from the run.
    pub skip: Vec<String>,

    /// Number of checks to run at once.
    pub jobs: Option<usize>,

    /// Seconds a single tool may run before it is killed.
    pub timeout: Option<u64>,
}

/// Values given on the command line, layered over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub exclude: Vec<String>,
    pub skip: Vec<String>,
    pub jobs: Option<usize>,
    pub timeout: Option<u64>,
}

impl GofishConfig {
    /// Layer command-line values over this config.
    ///
    /// Lists are extended (duplicates dropped); scalars are replaced.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        extend_unique(&mut self.exclude, &overrides.exclude);
        extend_unique(&mut self.skip, &overrides.skip);
        if overrides.jobs.is_some() {
            self.jobs = overrides.jobs;
        }
        if overrides.timeout.is_some() {
            self.timeout = overrides.timeout;
        }
        self
    }

    /// Worker count, never less than one.
    pub fn effective_jobs(&self) -> usize {
        self.jobs.unwrap_or(1).max(1)
    }

    /// Per-tool timeout; zero means none.
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

fn extend_unique(target: &mut Vec<String>, extra: &[String]) {
    for item in extra {
        if !target.contains(item) {
            target.push(item.clone());
        }
    }
}
