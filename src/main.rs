//! gofish CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use gofish::cli::{Cli, CommandDispatcher};
use gofish::report::EXIT_FAILURE;
use gofish::ui::{should_use_colors, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs always go to stderr so they never mix with `--checks` output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gofish=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gofish=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("gofish starting with args: {:?}", cli);

    let use_colors = !cli.no_color && should_use_colors();
    let mut ui = TerminalUI::new(use_colors);

    let dispatcher = CommandDispatcher::new(cli.path.clone());

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(EXIT_FAILURE as u8)
        }
    }
}
