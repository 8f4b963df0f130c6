//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! gofish has two modes selected by a flag rather than subcommands:
//! - [`run::RunCommand`] (default) runs checks and reports issues on stderr
//! - [`checks::ChecksCommand`] (`--checks`) lists applicability on stdout
//!
//! Both share [`workspace::Workspace`] for config, discovery and the registry.

pub mod checks;
pub mod dispatcher;
pub mod run;
pub mod workspace;

pub use checks::ChecksCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use run::RunCommand;
pub use workspace::Workspace;
