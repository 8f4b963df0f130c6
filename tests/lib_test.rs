//! Library integration tests.

use gofish::checks::{Applicability, Check, CheckRegistry, ExecContext, Issue};
use gofish::discovery::{discover, DiscoveryOptions};
use gofish::orchestrator::{Orchestrator, RunOptions};
use gofish::report::{HumanFormatter, ReportFormatter};
use gofish::requirements::{go_project, requires, ExecutableOnPath, Unmet};
use gofish::GofishError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A check defined outside the crate: reports every `.todo` file in a Go project.
struct TodoFiles;

impl Check for TodoFiles {
    fn name(&self) -> &str {
        "todo-files"
    }

    fn applicability(&self, dir: &Path) -> Applicability {
        requires(&[&go_project(dir)]).into()
    }

    fn execute(&self, dir: &Path, _ctx: &ExecContext) -> gofish::Result<Vec<Issue>> {
        let mut names: Vec<String> = fs::read_dir(dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".todo"))
            .collect();
        names.sort();
        Ok(names
            .into_iter()
            .filter_map(|name| Issue::new(name, "Unfinished work"))
            .collect())
    }
}

/// A check whose tool is always broken.
struct Broken;

impl Check for Broken {
    fn name(&self) -> &str {
        "broken"
    }

    fn applicability(&self, _dir: &Path) -> Applicability {
        Applicability::Ready
    }

    fn execute(&self, _dir: &Path, _ctx: &ExecContext) -> gofish::Result<Vec<Issue>> {
        Err(GofishError::ToolSpawn {
            tool: "broken".to_string(),
            message: "No such file or directory".to_string(),
        })
    }
}

fn tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    for (rel, content) in [
        ("svc/go.mod", "module svc"),
        ("svc/a.todo", ""),
        ("svc/b.todo", ""),
        ("web/package.json", "{}"),
        ("web/x.todo", ""),
    ] {
        let path = temp.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    temp
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> gofish::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn custom_checks_plug_into_the_orchestrator() {
    let temp = tree();
    let mut registry = CheckRegistry::new();
    registry.register(Box::new(TodoFiles));

    let dirs = discover(temp.path(), &DiscoveryOptions::default()).unwrap();
    let report = Orchestrator::new(&registry).run(&dirs).unwrap();

    let text = HumanFormatter::default().render(&report).unwrap();
    assert_eq!(
        text,
        "The following issues were detected by gofish, please address them:\n\
         \n\
         todo-files in svc: a.todo: Unfinished work\n\
         todo-files in svc: b.todo: Unfinished work\n"
    );
    assert_eq!(report.exit_code(), 2);
}

#[test]
fn diagnose_explains_skips() {
    let temp = tree();
    let mut registry = CheckRegistry::new();
    registry.register(Box::new(TodoFiles));

    let dirs = discover(temp.path(), &DiscoveryOptions::default()).unwrap();
    let statuses = Orchestrator::new(&registry).diagnose(&dirs);

    assert!(statuses[0].checks[0].applicability.is_ready());
    assert_eq!(
        statuses[1].checks[0].applicability,
        Applicability::NotApplicable(Unmet::FileMissing {
            file: "go.mod".to_string(),
            dir: temp.path().join("web"),
        })
    );
}

#[test]
fn failure_carries_check_and_directory() {
    let temp = tree();
    let mut registry = CheckRegistry::new();
    registry.register(Box::new(TodoFiles));
    registry.register(Box::new(Broken));

    let dirs = discover(temp.path(), &DiscoveryOptions::default()).unwrap();
    for jobs in [1, 4] {
        let err = Orchestrator::new(&registry)
            .with_options(RunOptions {
                jobs,
                timeout: None,
            })
            .run(&dirs)
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "broken in svc: error: failed to run broken: No such file or directory"
        );
        match err {
            GofishError::CheckFailed { directory, .. } => {
                assert_eq!(directory, PathBuf::from("svc"))
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}

#[test]
fn requirement_short_circuits_before_executable_lookup() {
    let temp = TempDir::new().unwrap();
    let result = requires(&[
        &go_project(temp.path()),
        &ExecutableOnPath::with_search_path("gofmt", vec![]),
    ]);

    assert!(matches!(result, Err(Unmet::FileMissing { .. })));
}
