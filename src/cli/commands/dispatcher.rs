//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the parsed CLI to a command

use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::report::EXIT_CLEAN;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the process exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: EXIT_CLEAN,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Result for a given exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        if exit_code == EXIT_CLEAN {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }
}

/// Dispatches the parsed CLI to a command.
pub struct CommandDispatcher {
    root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given scan root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Dispatch and execute a command.
    ///
    /// `--checks` selects diagnostics; everything else is a run.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if cli.checks {
            let cmd = super::checks::ChecksCommand::new(&self.root, cli.overrides());
            cmd.execute(ui)
        } else {
            let cmd = super::run::RunCommand::new(&self.root, cli.overrides(), cli.format);
            cmd.execute(ui)
        }
    }
}
