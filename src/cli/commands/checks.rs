//! `--checks`: show which checks would run where, without running them.

use std::path::{Path, PathBuf};

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::orchestrator::Orchestrator;
use crate::report::{DiagnosticsFormatter, EXIT_FAILURE};
use crate::ui::UserInterface;

/// Diagnostics command.
pub struct ChecksCommand {
    root: PathBuf,
    overrides: ConfigOverrides,
}

impl ChecksCommand {
    /// Create a new diagnostics command.
    pub fn new(root: &Path, overrides: ConfigOverrides) -> Self {
        Self {
            root: root.to_path_buf(),
            overrides,
        }
    }
}

impl Command for ChecksCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = match Workspace::prepare(&self.root, &self.overrides) {
            Ok(ws) => ws,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_FAILURE));
            }
        };

        workspace.warn_unknown_skips(ui);

        let statuses = Orchestrator::new(&workspace.registry).diagnose(&workspace.dirs);
        let text = DiagnosticsFormatter::new(ui.theme().clone()).render(&statuses)?;
        ui.output(&text);

        Ok(CommandResult::success())
    }
}
