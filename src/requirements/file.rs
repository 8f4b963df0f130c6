//! File presence requirements.

use std::path::{Path, PathBuf};

use super::{Requirement, Unmet};

/// Requires a file to exist directly inside a directory.
#[derive(Debug, Clone)]
pub struct FileInDir {
    dir: PathBuf,
    file: String,
}

impl FileInDir {
    /// Create a requirement for `file` inside `dir`.
    pub fn new(dir: &Path, file: &str) -> Self {
        Self {
            dir: dir.to_path_buf(),
            file: file.to_string(),
        }
    }
}

impl Requirement for FileInDir {
    fn evaluate(&self) -> Result<(), Unmet> {
        if self.dir.join(&self.file).exists() {
            Ok(())
        } else {
            Err(Unmet::FileMissing {
                file: self.file.clone(),
                dir: self.dir.clone(),
            })
        }
    }
}

/// Requires a Go module root.
pub fn go_project(dir: &Path) -> FileInDir {
    FileInDir::new(dir, "go.mod")
}

/// Requires a JavaScript package root.
pub fn js_project(dir: &Path) -> FileInDir {
    FileInDir::new(dir, super::MANIFEST_FILE)
}
