//! The default command: run every applicable check and report issues.

use std::path::{Path, PathBuf};

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::orchestrator::Orchestrator;
use crate::report::{
    HumanFormatter, JsonFormatter, OutputFormat, Report, ReportFormatter, EXIT_FAILURE,
};
use crate::ui::{GofishTheme, UserInterface};

/// Runs checks across the tree.
pub struct RunCommand {
    root: PathBuf,
    overrides: ConfigOverrides,
    format: OutputFormat,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(root: &Path, overrides: ConfigOverrides, format: OutputFormat) -> Self {
        Self {
            root: root.to_path_buf(),
            overrides,
            format,
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = match Workspace::prepare(&self.root, &self.overrides) {
            Ok(ws) => ws,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_FAILURE));
            }
        };

        workspace.warn_unknown_skips(ui);

        let orchestrator =
            Orchestrator::new(&workspace.registry).with_options(workspace.run_options());

        let report = match orchestrator.run(&workspace.dirs) {
            Ok(report) => report,
            Err(e) => {
                tracing::debug!("Run aborted: {:?}", e);
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_FAILURE));
            }
        };

        tracing::info!("Run finished with {} issue(s)", report.len());

        let text = render_report(self.format, &report, ui.theme())?;
        if !text.is_empty() {
            ui.report(&text);
        }

        Ok(CommandResult::from_exit_code(report.exit_code()))
    }
}

/// Render a report in the requested format.
///
/// Human output is empty for a clean report; JSON is always a valid document.
pub fn render_report(format: OutputFormat, report: &Report, theme: &GofishTheme) -> Result<String> {
    let text = match format {
        OutputFormat::Human => HumanFormatter::new(theme.clone()).render(report)?,
        OutputFormat::Json => JsonFormatter::new().render(report)?,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Issue;
    use crate::discovery::ProjectDir;
    use crate::report::ReportEntry;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn tree_without_projects_is_clean() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "# hi").unwrap();
        let mut ui = MockUI::new();

        let result = RunCommand::new(temp.path(), ConfigOverrides::default(), OutputFormat::Human)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 0);
        assert!(ui.reports().is_empty());
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn clean_json_run_prints_empty_array() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = RunCommand::new(temp.path(), ConfigOverrides::default(), OutputFormat::Json)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.stderr_report().trim(), "[]");
    }

    #[test]
    fn invalid_config_exits_with_failure() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gofish.yml"), "skip: 3: 4\n").unwrap();
        let mut ui = MockUI::new();

        let result = RunCommand::new(temp.path(), ConfigOverrides::default(), OutputFormat::Human)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.errors().len(), 1);
        assert!(ui.errors()[0].contains(".gofish.yml"));
    }

    #[test]
    fn missing_root_exits_with_failure() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = RunCommand::new(
            &temp.path().join("absent"),
            ConfigOverrides::default(),
            OutputFormat::Human,
        )
        .execute(&mut ui)
        .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.errors()[0].starts_with("Error finding project directories"));
    }

    #[test]
    fn render_report_human() {
        let report = Report::new(vec![ReportEntry::new(
            "gofmt",
            &ProjectDir::root(Path::new("/repo")),
            Issue::new("main.go", "File needs formatting").unwrap(),
        )]);

        let text = render_report(OutputFormat::Human, &report, &GofishTheme::plain()).unwrap();

        assert!(text.ends_with("gofmt: main.go: File needs formatting\n"));
    }
}
