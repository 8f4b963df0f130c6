//! Requirement composition for check applicability.
//!
//! A [`Requirement`] is a zero-argument precondition: it either holds, or it
//! fails with an [`Unmet`] naming what is missing. Checks gate themselves on an
//! ordered list of requirements via [`requires`], which stops at the first
//! failure. List cheap structural requirements (a file exists) before expensive
//! ones (PATH lookups, manifest parsing) so the reason reported is the most
//! specific one and the expensive probes are skipped.
//!
//! # Modules
//!
//! - [`file`] - Marker and lock file presence
//! - [`executable`] - Executable resolution on the search path
//! - [`manifest`] - `package.json` dependency and script declarations
//!
//! # Example
//!
//! ```
//! use gofish::requirements::{requires, FileInDir, Unmet};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! std::fs::write(temp.path().join("go.mod"), "module example").unwrap();
//!
//! let go_mod = FileInDir::new(temp.path(), "go.mod");
//! let conf = FileInDir::new(temp.path(), "staticcheck.conf");
//!
//! assert!(requires(&[&go_mod]).is_ok());
//! assert!(matches!(
//!     requires(&[&go_mod, &conf]),
//!     Err(Unmet::FileMissing { .. })
//! ));
//! ```

pub mod executable;
pub mod file;
pub mod manifest;

pub use executable::{is_executable, parse_system_path, resolve_tool_path, ExecutableOnPath};
pub use file::{go_project, js_project, FileInDir};
pub use manifest::{ManifestDependency, ManifestScript, PackageManifest, MANIFEST_FILE};

use std::path::PathBuf;
use thiserror::Error;

/// Why a requirement does not hold.
///
/// This is the reason shown in diagnostics mode next to a check that is not
/// applicable in a directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unmet {
    /// A file expected in the directory is absent.
    #[error("{file} not found in {}", dir.display())]
    FileMissing { file: String, dir: PathBuf },

    /// No executable with this name on the search path.
    #[error("{name} not found in PATH")]
    ExecutableMissing { name: String },

    /// The manifest exists but could not be read.
    #[error("failed to read {}: {message}", path.display())]
    ManifestUnreadable { path: PathBuf, message: String },

    /// The manifest is not valid JSON of the expected shape.
    #[error("failed to parse {}: {message}", path.display())]
    ManifestInvalid { path: PathBuf, message: String },

    /// The manifest does not declare the package in any dependency class.
    #[error("package {package} not found in dependencies or devDependencies")]
    DependencyMissing { package: String },

    /// The manifest does not declare the script.
    #[error("script {script} not found in package.json")]
    ScriptMissing { script: String },
}

/// A precondition gating whether a check may run.
///
/// Implementations only inspect the filesystem, the search path or the
/// environment. Closures returning `Result<(), Unmet>` are requirements too.
pub trait Requirement: Send + Sync {
    /// Evaluate the requirement now.
    fn evaluate(&self) -> Result<(), Unmet>;
}

impl<F> Requirement for F
where
    F: Fn() -> Result<(), Unmet> + Send + Sync,
{
    fn evaluate(&self) -> Result<(), Unmet> {
        self()
    }
}

/// Evaluate requirements in order, stopping at the first one that fails.
///
/// Requirements after the first failure are never evaluated.
pub fn requires(requirements: &[&dyn Requirement]) -> Result<(), Unmet> {
    for requirement in requirements {
        requirement.evaluate()?;
    }
    Ok(())
}
