//! `go test` check.

use std::path::Path;

use super::GO_DOWNLOADING;
use crate::checks::issue::non_blank_lines;
use crate::checks::process::{run_tool, ToolCommand};
use crate::checks::{Applicability, Check, ExecContext, Issue};
use crate::error::{GofishError, Result};
use crate::requirements::{go_project, requires, ExecutableOnPath};

/// Runs the module's tests.
///
/// Build errors arrive on stderr, test failures on stdout among the passing
/// output, so stdout is filtered down to failure lines.
pub struct GoTestCheck {
    command: ToolCommand,
}

impl GoTestCheck {
    pub fn new() -> Self {
        Self {
            command: ToolCommand::new("go", &["test", "./..."]),
        }
    }
}

impl Default for GoTestCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for GoTestCheck {
    fn name(&self) -> &str {
        "go test"
    }

    fn applicability(&self, dir: &Path) -> Applicability {
        requires(&[&go_project(dir), &ExecutableOnPath::new(&self.command.program)]).into()
    }

    fn execute(&self, dir: &Path, ctx: &ExecContext) -> Result<Vec<Issue>> {
        let output = run_tool(dir, &self.command, ctx.timeout)?;

        if !output.success && output.is_silent() {
            return Err(GofishError::ToolSilentFailure {
                tool: self.command.display(),
                code: output.exit_code,
            });
        }

        Ok(parse_go_test(&output.stdout, &output.stderr))
    }
}

fn is_failure_line(line: &str) -> bool {
    line.starts_with("FAIL")
        || line.contains("--- FAIL:")
        || line.contains("panic:")
        || line.contains("Error:")
}

/// Stderr lines (minus download notices) then stdout failure lines, in order.
///
/// Build errors carry a `file:line:col: message` location; failure markers
/// from stdout are kept whole.
pub fn parse_go_test(stdout: &str, stderr: &str) -> Vec<Issue> {
    let build_errors = non_blank_lines(stderr)
        .filter(|line| !line.starts_with(GO_DOWNLOADING))
        .filter_map(Issue::from_line);
    let failures = non_blank_lines(stdout)
        .filter(|line| is_failure_line(line))
        .filter_map(Issue::message);

    build_errors.chain(failures).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_failures_from_stdout() {
        let stdout = "\
=== RUN   TestAdd
--- FAIL: TestAdd (0.00s)
    math_test.go:9: Add(1, 2) = 4, want 3
FAIL
FAIL\texample.com/math\t0.002s
ok  \texample.com/strings\t0.001s
";
        let issues = parse_go_test(stdout, "");

        let messages: Vec<_> = issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "--- FAIL: TestAdd (0.00s)",
                "FAIL",
                "FAIL\texample.com/math\t0.002s"
            ]
        );
        assert!(issues.iter().all(|i| i.file.is_empty()));
    }

    #[test]
    fn one_issue_per_line_even_with_several_markers() {
        let issues = parse_go_test("--- FAIL: TestX panic: boom\n", "");
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn captures_panics_and_errors() {
        let stdout = "panic: runtime error: index out of range [recovered]\n    Error: expected 1\n";
        assert_eq!(parse_go_test(stdout, "").len(), 2);
    }

    #[test]
    fn build_errors_from_stderr_come_first() {
        let stderr = "\
go: downloading github.com/stretchr/testify v1.9.0
# example.com/app
./main.go:4:2: undefined: missing
";
        let stdout = "FAIL\texample.com/app [build failed]\n";

        let issues = parse_go_test(stdout, stderr);

        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].message, "# example.com/app");
        assert_eq!(issues[0].file, "");
        assert_eq!(issues[1], Issue::new("./main.go:4:2", "undefined: missing").unwrap());
        assert_eq!(issues[2].message, "FAIL\texample.com/app [build failed]");
        assert_eq!(issues[2].file, "");
    }

    #[test]
    fn build_errors_split_like_go_vet() {
        let line = "./main.go:5:2: undefined: foo";

        assert_eq!(
            parse_go_test("", line),
            crate::checks::builtin::go_vet::parse_go_vet(line)
        );
    }

    #[test]
    fn stdout_failure_with_colon_keeps_whole_line() {
        let issues = parse_go_test("--- FAIL: TestAdd (0.00s)\n", "");
        assert_eq!(issues, vec![Issue::message("--- FAIL: TestAdd (0.00s)").unwrap()]);
    }

    #[test]
    fn passing_run_has_no_issues() {
        let stdout = "ok  \texample.com/app\t0.004s\n?   \texample.com/cmd\t[no test files]\n";
        assert!(parse_go_test(stdout, "").is_empty());
    }
}
