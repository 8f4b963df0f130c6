//! `svelte-check` type checking, run through the project's package manager.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use super::{is_script_banner, PackageManager};
use crate::checks::issue::non_blank_lines;
use crate::checks::process::{run_tool, ToolCommand};
use crate::checks::{Applicability, Check, ExecContext, Issue};
use crate::error::{GofishError, Result};
use crate::requirements::{js_project, requires, ExecutableOnPath, FileInDir, ManifestDependency};

const DEPENDENCY: &str = "svelte-check";

static SUMMARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"svelte-check found (\d+) errors? and (\d+) warnings?").unwrap()
});

pub struct SvelteCheck {
    name: String,
    package_manager: PackageManager,
    command: ToolCommand,
}

impl SvelteCheck {
    pub fn new(package_manager: PackageManager) -> Self {
        Self {
            name: format!("{}-svelte-check", package_manager.executable),
            package_manager,
            command: ToolCommand::new(package_manager.executable, &["run", DEPENDENCY]),
        }
    }
}

impl Check for SvelteCheck {
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

        if !output.success && output.is_silent() {
            return Err(GofishError::ToolSilentFailure {
                tool: self.command.display(),
                code: output.exit_code,
            });
        }

        Ok(parse_svelte_check(&output.combined()))
    }
}

fn is_informational(line: &str) -> bool {
    is_script_banner(line)
        || line.contains("====================================")
        || line.contains("Getting Svelte diagnostics")
        || line.contains("svelte-check found 0 errors")
        || line.contains("svelte-check found 0 warnings")
}

/// Error and warning counts from the summary line, if there is one.
fn summary_counts(output: &str) -> Option<(u64, u64)> {
    let caps = output.lines().find_map(|line| SUMMARY.captures(line))?;
    let errors = caps.get(1)?.as_str().parse().ok()?;
    let warnings = caps.get(2)?.as_str().parse().ok()?;
    Some((errors, warnings))
}

/// Diagnostic lines from `svelte-check`, split at the location separator.
///
/// A summary reporting no errors and no warnings means nothing to report,
/// whatever else was printed.
pub fn parse_svelte_check(output: &str) -> Vec<Issue> {
    if summary_counts(output) == Some((0, 0)) {
        return Vec::new();
    }

    non_blank_lines(output)
        .filter(|line| !is_informational(line))
        .filter_map(Issue::from_line)
        .collect()
}
