//! Prettier formatting check, run through the project's package manager.

use std::path::Path;

use super::{is_script_banner, PackageManager};
use crate::checks::issue::non_blank_lines;
use crate::checks::process::{run_tool, ToolCommand};
use crate::checks::{Applicability, Check, ExecContext, Issue};
use crate::error::{GofishError, Result};
use crate::requirements::{js_project, requires, ExecutableOnPath, FileInDir, ManifestDependency};

const DEPENDENCY: &str = "prettier";

/// Status lines Prettier prints around its findings.
const INFORMATIONAL: [&str; 2] = [
    "Checking formatting...",
    "All matched files use Prettier code style!",
];

/// `prettier --check .` via `npm run` or `bun run`.
pub struct PrettierCheck {
    name: String,
    package_manager: PackageManager,
    command: ToolCommand,
}

impl PrettierCheck {
    pub fn new(package_manager: PackageManager) -> Self {
        Self {
            name: format!("{}-prettier", package_manager.executable),
            package_manager,
            command: ToolCommand::new(
                package_manager.executable,
                &["run", DEPENDENCY, "--", "--check", "."],
            ),
        }
    }
}

impl Check for PrettierCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn applicability(&self, dir: &Path) -> Applicability {
        requires(&[
            &js_project(dir),
            &FileInDir::new(dir, self.package_manager.lock_file),
            &ManifestDependency::new(dir, DEPENDENCY),
            &ExecutableOnPath::new(self.package_manager.executable),
        ])
        .into()
    }

    fn execute(&self, dir: &Path, ctx: &ExecContext) -> Result<Vec<Issue>> {
        let output = run_tool(dir, &self.command, ctx.timeout)?;

        if output.success {
            return Ok(Vec::new());
        }
        if output.is_silent() {
            return Err(GofishError::ToolSilentFailure {
                tool: self.command.display(),
                code: output.exit_code,
            });
        }

        Ok(parse_prettier(&output.combined()))
    }
}

fn is_informational(line: &str) -> bool {
    is_script_banner(line) || INFORMATIONAL.iter().any(|info| line.contains(info))
}

/// One issue per line of a failed `prettier --check`, minus status lines.
pub fn parse_prettier(output: &str) -> Vec<Issue> {
    non_blank_lines(output)
        .filter(|line| !is_informational(line))
        .filter_map(Issue::message)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::builtin::{BUN, NPM};
    use crate::requirements::Unmet;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn names_follow_package_manager() {
        assert_eq!(PrettierCheck::new(NPM).name(), "npm-prettier");
        assert_eq!(PrettierCheck::new(BUN).name(), "bun-prettier");
    }

    #[test]
    fn command_runs_through_package_manager() {
        assert_eq!(
            PrettierCheck::new(BUN).command.display(),
            "bun run prettier -- --check ."
        );
    }

    #[test]
    fn parses_unformatted_files() {
        let output = "\

> web@0.1.0 prettier
> prettier --check .

Checking formatting...
[warn] src/App.svelte
[warn] src/lib/api.ts
[warn] Code style issues found in 2 files. Run Prettier with --write to fix.
";
        let issues = parse_prettier(output);

        let messages: Vec<_> = issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "[warn] src/App.svelte",
                "[warn] src/lib/api.ts",
                "[warn] Code style issues found in 2 files. Run Prettier with --write to fix.",
            ]
        );
    }

    #[test]
    fn clean_summary_is_not_an_issue() {
        let output = "Checking formatting...\nAll matched files use Prettier code style!\n";
        assert!(parse_prettier(output).is_empty());
    }

    #[test]
    fn lock_file_selects_package_manager() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"devDependencies": {"prettier": "^3"}}"#,
        )
        .unwrap();
        fs::write(temp.path().join("bun.lock"), "").unwrap();

        match PrettierCheck::new(NPM).applicability(temp.path()) {
            Applicability::NotApplicable(Unmet::FileMissing { file, .. }) => {
                assert_eq!(file, "package-lock.json")
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn dependency_checked_before_executable() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{"name": "web"}"#).unwrap();
        fs::write(temp.path().join("package-lock.json"), "{}").unwrap();

        assert_eq!(
            PrettierCheck::new(NPM).applicability(temp.path()),
            Applicability::NotApplicable(Unmet::DependencyMissing {
                package: "prettier".to_string()
            })
        );
    }
}
