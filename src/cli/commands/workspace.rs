//! Shared setup for commands: config, discovery and the check registry.

use std::path::Path;

use crate::checks::CheckRegistry;
use crate::config::{load_config, ConfigOverrides, GofishConfig};
use crate::discovery::{discover, DiscoveryOptions, ProjectDir};
use crate::error::Result;
use crate::orchestrator::RunOptions;
use crate::ui::UserInterface;

/// Everything a command needs before evaluating checks.
pub struct Workspace {
    pub config: GofishConfig,
    pub dirs: Vec<ProjectDir>,
    pub registry: CheckRegistry,
    /// Names in the skip list that match no check.
    pub unknown_skips: Vec<String>,
}

impl Workspace {
    /// Load config from `root`, apply overrides, discover projects and build
    /// the registry with skipped checks removed.
    pub fn prepare(root: &Path, overrides: &ConfigOverrides) -> Result<Self> {
        let config = load_config(root)?.with_overrides(overrides);

        let options = DiscoveryOptions::default().with_excluded(config.exclude.iter().cloned());
        let dirs = discover(root, &options)?;

        let builtins = CheckRegistry::with_builtins();
        let unknown_skips: Vec<String> = config
            .skip
            .iter()
            .filter(|name| builtins.get(name).is_none())
            .cloned()
            .collect();
        let registry = builtins.without(&config.skip);

        tracing::debug!(
            "Prepared {} director(ies) and {} check(s)",
            dirs.len(),
            registry.len()
        );

        Ok(Self {
            config,
            dirs,
            registry,
            unknown_skips,
        })
    }

    /// Warn about skip entries that match no check.
    pub fn warn_unknown_skips(&self, ui: &mut dyn UserInterface) {
        for name in &self.unknown_skips {
            ui.warning(&format!("Unknown check in skip list: {}", name));
        }
    }

    /// Run options derived from the config.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            jobs: self.config.effective_jobs(),
            timeout: self.config.timeout_duration(),
        }
    }
}
