//! `go vet` check.

use std::path::Path;

use super::GO_DOWNLOADING;
use crate::checks::issue::non_blank_lines;
use crate::checks::process::{run_tool, ToolCommand};
use crate::checks::{Applicability, Check, ExecContext, Issue};
use crate::error::{GofishError, Result};
use crate::requirements::{go_project, requires, ExecutableOnPath};

/// Runs `go vet ./...` and reports its diagnostics.
///
/// `go vet` exits non-zero whenever it reports something, so the exit status
/// alone is not an error. Diagnostics are on stderr.
pub struct GoVetCheck {
    command: ToolCommand,
}

impl GoVetCheck {
    pub fn new() -> Self {
        Self {
            command: ToolCommand::new("go", &["vet", "./..."]),
        }
    }
}

impl Default for GoVetCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for GoVetCheck {
    fn name(&self) -> &str {
        "go vet"
    }

    fn applicability(&self, dir: &Path) -> Applicability {
        requires(&[&go_project(dir), &ExecutableOnPath::new(&self.command.program)]).into()
    }

    fn execute(&self, dir: &Path, ctx: &ExecContext) -> Result<Vec<Issue>> {
        let output = run_tool(dir, &self.command, ctx.timeout)?;

        if !output.success && output.stderr.trim().is_empty() {
            return Err(GofishError::ToolSilentFailure {
                tool: self.command.display(),
                code: output.exit_code,
            });
        }

        Ok(parse_go_vet(&output.stderr))
    }
}

/// One issue per diagnostic line, skipping module download notices.
pub fn parse_go_vet(stderr: &str) -> Vec<Issue> {
    non_blank_lines(stderr)
        .filter(|line| !line.starts_with(GO_DOWNLOADING))
        .filter_map(Issue::from_line)
        .collect()
}
