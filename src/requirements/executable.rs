//! Executable resolution on the search path.
//!
//! Lookup walks PATH entries directly instead of shelling out to `which`,
//! whose behavior varies across systems.

use std::path::{Path, PathBuf};

use super::{Requirement, Unmet};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

#[cfg(windows)]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    ["", ".exe", ".cmd", ".bat"]
        .iter()
        .map(|ext| dir.join(format!("{tool}{ext}")))
        .collect()
}

#[cfg(not(windows))]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    vec![dir.join(tool)]
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that is a regular file and executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .flat_map(|dir| candidates(dir, tool))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Requires a named executable to resolve on the search path.
///
/// The system PATH is read at evaluation time unless an explicit search path
/// was supplied.
#[derive(Debug, Clone)]
pub struct ExecutableOnPath {
    name: String,
    search_path: Option<Vec<PathBuf>>,
}

impl ExecutableOnPath {
    /// Require `name` on the system PATH.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            search_path: None,
        }
    }

    /// Require `name` on an explicit list of directories.
    pub fn with_search_path(name: &str, search_path: Vec<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            search_path: Some(search_path),
        }
    }

    /// Resolve the executable, if present.
    pub fn resolve(&self) -> Option<PathBuf> {
        match &self.search_path {
            Some(entries) => resolve_tool_path(&self.name, entries),
            None => resolve_tool_path(&self.name, &parse_system_path()),
        }
    }
}

impl Requirement for ExecutableOnPath {
    fn evaluate(&self) -> Result<(), Unmet> {
        match self.resolve() {
            Some(path) => {
                tracing::debug!("Resolved {} to {}", self.name, path.display());
                Ok(())
            }
            None => Err(Unmet::ExecutableMissing {
                name: self.name.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn resolve_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        create_fake_binary(&dir_a.join("gofmt"));
        create_fake_binary(&dir_b.join("gofmt"));

        let result = resolve_tool_path("gofmt", &[dir_a.clone(), dir_b]);
        assert_eq!(result, Some(dir_a.join("gofmt")));
    }

    #[test]
    fn resolve_returns_none_when_absent() {
        let temp = TempDir::new().unwrap();
        assert!(resolve_tool_path("gofmt", &[temp.path().to_path_buf()]).is_none());
    }

    #[test]
    fn directories_are_not_executables() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("go")).unwrap();

        assert!(resolve_tool_path("go", &[temp.path().to_path_buf()]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn skips_non_executable_files() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        fs::create_dir_all(&dir_a).unwrap();
        fs::write(dir_a.join("npm"), "not executable").unwrap();
        fs::set_permissions(dir_a.join("npm"), fs::Permissions::from_mode(0o644)).unwrap();
        create_fake_binary(&dir_b.join("npm"));

        let result = resolve_tool_path("npm", &[dir_a, dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("npm")));
    }

    #[test]
    fn requirement_holds_with_search_path() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("staticcheck"));

        let req = ExecutableOnPath::with_search_path("staticcheck", vec![temp.path().into()]);
        assert!(req.evaluate().is_ok());
    }

    #[test]
    fn requirement_fails_with_name() {
        let temp = TempDir::new().unwrap();

        let req = ExecutableOnPath::with_search_path("bun", vec![temp.path().into()]);
        assert_eq!(
            req.evaluate().unwrap_err(),
            Unmet::ExecutableMissing {
                name: "bun".to_string()
            }
        );
    }

    #[test]
    fn missing_tool_on_system_path() {
        let req = ExecutableOnPath::new("gofish-test-tool-that-does-not-exist-12345");
        assert!(req.evaluate().is_err());
    }
}
