//! `gofmt` formatting check.

use std::path::Path;

use crate::checks::issue::non_blank_lines;
use crate::checks::process::{run_tool, ToolCommand};
use crate::checks::{Applicability, Check, ExecContext, Issue};
use crate::error::{GofishError, Result};
use crate::requirements::{go_project, requires, ExecutableOnPath};

/// Lists Go files whose formatting differs from `gofmt`'s.
pub struct GofmtCheck {
    command: ToolCommand,
}

impl GofmtCheck {
    pub fn new() -> Self {
        Self {
            command: ToolCommand::new("gofmt", &["-l", "."]),
        }
    }
}

impl Default for GofmtCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for GofmtCheck {
    fn name(&self) -> &str {
        "gofmt"
    }

    fn applicability(&self, dir: &Path) -> Applicability {
        requires(&[&go_project(dir), &ExecutableOnPath::new(&self.command.program)]).into()
    }

    fn execute(&self, dir: &Path, ctx: &ExecContext) -> Result<Vec<Issue>> {
        let output = run_tool(dir, &self.command, ctx.timeout)?;

        // `gofmt -l` exits 0 when it merely lists files; anything else is a
        // syntax error or I/O problem, not a formatting finding.
        if !output.success {
            return Err(GofishError::ToolFailed {
                tool: self.command.program.clone(),
                code: output.exit_code,
                message: non_blank_lines(&output.stderr)
                    .next()
                    .unwrap_or("no error output")
                    .to_string(),
            });
        }

        Ok(parse_gofmt(&output.stdout))
    }
}

/// One issue per file listed by `gofmt -l`.
pub fn parse_gofmt(stdout: &str) -> Vec<Issue> {
    non_blank_lines(stdout)
        .filter_map(|file| Issue::new(file, "File needs formatting"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::Unmet;
    use tempfile::TempDir;

    #[test]
    fn parses_listed_files() {
        let issues = parse_gofmt("main.go\ninternal/server/handler.go\n");
        assert_eq!(
            issues,
            vec![
                Issue::new("main.go", "File needs formatting").unwrap(),
                Issue::new("internal/server/handler.go", "File needs formatting").unwrap(),
            ]
        );
    }

    #[test]
    fn empty_output_means_no_issues() {
        assert!(parse_gofmt("").is_empty());
        assert!(parse_gofmt("\n  \n").is_empty());
    }

    #[test]
    fn not_applicable_without_go_mod() {
        let temp = TempDir::new().unwrap();
        let check = GofmtCheck::new();

        match check.applicability(temp.path()) {
            Applicability::NotApplicable(Unmet::FileMissing { file, .. }) => {
                assert_eq!(file, "go.mod")
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
