//! `package.json` manifest requirements.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{Requirement, Unmet};

/// File name of the JavaScript package manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// The parts of `package.json` that gate checks.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub peer_dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub optional_dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Read and parse the manifest in `dir`.
    pub fn load(dir: &Path) -> Result<Self, Unmet> {
        let path = dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path).map_err(|e| Unmet::ManifestUnreadable {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&path, &content)
    }

    /// Parse manifest content. `path` is only used in error messages.
    pub fn parse(path: &Path, content: &str) -> Result<Self, Unmet> {
        serde_json::from_str(content).map_err(|e| Unmet::ManifestInvalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Whether the package is declared in any dependency class.
    pub fn declares_dependency(&self, package: &str) -> bool {
        [
            &self.dependencies,
            &self.dev_dependencies,
            &self.peer_dependencies,
            &self.optional_dependencies,
        ]
        .iter()
        .any(|class| class.contains_key(package))
    }

    /// Whether the script is declared.
    pub fn declares_script(&self, script: &str) -> bool {
        self.scripts.contains_key(script)
    }
}

/// Requires `package.json` in a directory to declare a dependency.
#[derive(Debug, Clone)]
pub struct ManifestDependency {
    dir: PathBuf,
    package: String,
}

impl ManifestDependency {
    pub fn new(dir: &Path, package: &str) -> Self {
        Self {
            dir: dir.to_path_buf(),
            package: package.to_string(),
        }
    }
}

impl Requirement for ManifestDependency {
    fn evaluate(&self) -> Result<(), Unmet> {
        if PackageManifest::load(&self.dir)?.declares_dependency(&self.package) {
            Ok(())
        } else {
            Err(Unmet::DependencyMissing {
                package: self.package.clone(),
            })
        }
    }
}

/// Requires `package.json` in a directory to declare a script.
#[derive(Debug, Clone)]
pub struct ManifestScript {
    dir: PathBuf,
    script: String,
}

impl ManifestScript {
    pub fn new(dir: &Path, script: &str) -> Self {
        Self {
            dir: dir.to_path_buf(),
            script: script.to_string(),
        }
    }
}

impl Requirement for ManifestScript {
    fn evaluate(&self) -> Result<(), Unmet> {
        if PackageManifest::load(&self.dir)?.declares_script(&self.script) {
            Ok(())
        } else {
            Err(Unmet::ScriptMissing {
                script: self.script.clone(),
            })
        }
    }
}
