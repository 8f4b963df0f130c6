//! Project directory discovery.
//!
//! Walks the scan root in pre-order, lexically sorted so the result does not
//! depend on filesystem ordering, and collects every directory that directly
//! contains a project marker. Hidden directories and dependency/build caches
//! are pruned without being descended into. When nothing is found the root
//! itself is the only project directory.
//!
//! # Example
//!
//! ```
//! use gofish::discovery::{discover, DiscoveryOptions};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join("api")).unwrap();
//! fs::write(temp.path().join("api/go.mod"), "module api").unwrap();
//!
//! let dirs = discover(temp.path(), &DiscoveryOptions::default()).unwrap();
//! assert_eq!(dirs.len(), 1);
//! assert_eq!(dirs[0].display_name(), "api");
//! ```

pub mod markers;

pub use markers::{DEFAULT_EXCLUDED_DIRS, PROJECT_MARKERS};

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{GofishError, Result};

/// A directory to run checks in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDir {
    /// Path relative to the scan root; `.` for the root itself.
    pub relative: PathBuf,
    /// Path to hand to tools (the root joined with `relative`).
    pub path: PathBuf,
}

impl ProjectDir {
    /// The scan root itself.
    pub fn root(root: &Path) -> Self {
        Self {
            relative: PathBuf::from("."),
            path: root.to_path_buf(),
        }
    }

    /// A directory below the scan root.
    pub fn nested(root: &Path, relative: &Path) -> Self {
        Self {
            relative: relative.to_path_buf(),
            path: root.join(relative),
        }
    }

    /// Whether this is the scan root.
    pub fn is_root(&self) -> bool {
        self.relative == Path::new(".")
    }

    /// Name used in reports, with `/` separators on every platform.
    pub fn display_name(&self) -> String {
        self.relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// What counts as a project and what is skipped.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// File names marking a project directory.
    pub markers: Vec<String>,
    /// Directory names never descended into.
    pub excluded: Vec<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            markers: PROJECT_MARKERS.iter().map(|m| m.to_string()).collect(),
            excluded: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl DiscoveryOptions {
    /// Add directory names to skip, keeping the defaults.
    pub fn with_excluded<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.excluded.contains(&name) {
                self.excluded.push(name);
            }
        }
        self
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || self.excluded.iter().any(|excluded| *excluded == name)
    }

    fn is_project(&self, dir: &Path) -> bool {
        self.markers.iter().any(|marker| dir.join(marker).is_file())
    }
}

/// Find project directories under `root`, in traversal order.
///
/// Never returns an empty list: with no markers anywhere the root is returned.
pub fn discover(root: &Path, options: &DiscoveryOptions) -> Result<Vec<ProjectDir>> {
    if !root.is_dir() {
        return Err(GofishError::Discovery {
            path: root.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !options.is_pruned(entry));

    let mut dirs: Vec<ProjectDir> = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => {
                return Err(GofishError::Discovery {
                    path: root.to_path_buf(),
                    message: e.to_string(),
                });
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_dir() || !options.is_project(entry.path()) {
            continue;
        }

        let dir = match entry.path().strip_prefix(root) {
            Ok(rel) if rel.as_os_str().is_empty() => ProjectDir::root(root),
            Ok(rel) => ProjectDir::nested(root, rel),
            Err(_) => continue,
        };
        if !dirs.contains(&dir) {
            tracing::debug!("Found project directory {}", dir.display_name());
            dirs.push(dir);
        }
    }

    if dirs.is_empty() {
        tracing::debug!("No project markers found, using the root");
        dirs.push(ProjectDir::root(root));
    }

    Ok(dirs)
}
