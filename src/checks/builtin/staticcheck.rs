//! `staticcheck` check.
//!
//! Only runs in modules that opted in with a `staticcheck.conf`.

use std::path::Path;

use crate::checks::issue::non_blank_lines;
use crate::checks::process::{run_tool, ToolCommand};
use crate::checks::{Applicability, Check, ExecContext, Issue};
use crate::error::{GofishError, Result};
use crate::requirements::{go_project, requires, ExecutableOnPath, FileInDir};

pub struct StaticcheckCheck {
    command: ToolCommand,
}

impl StaticcheckCheck {
    pub fn new() -> Self {
        Self {
            command: ToolCommand::new("staticcheck", &["./..."]),
        }
    }
}

impl Default for StaticcheckCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for StaticcheckCheck {
    fn name(&self) -> &str {
        "staticcheck"
    }

    fn applicability(&self, dir: &Path) -> Applicability {
        requires(&[
            &go_project(dir),
            &ExecutableOnPath::new(&self.command.program),
            &FileInDir::new(dir, "staticcheck.conf"),
        ])
        .into()
    }

    fn execute(&self, dir: &Path, ctx: &ExecContext) -> Result<Vec<Issue>> {
        let output = run_tool(dir, &self.command, ctx.timeout)?;

        if !output.success && output.is_silent() {
            return Err(GofishError::ToolSilentFailure {
                tool: self.command.display(),
                code: output.exit_code,
            });
        }

        Ok(parse_staticcheck(&output.combined()))
    }
}

/// One issue per output line, split at the location separator.
pub fn parse_staticcheck(output: &str) -> Vec<Issue> {
    non_blank_lines(output).filter_map(Issue::from_line).collect()
}
