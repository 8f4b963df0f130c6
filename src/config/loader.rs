//! Configuration file discovery and loading.

use crate::config::schema::GofishConfig;
use crate::error::{GofishError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names looked for at the scan root, first match wins.
pub const CONFIG_FILE_NAMES: &[&str] = &[".gofish.yml", ".gofish.yaml"];

/// Find the config file for a scan root, if there is one.
pub fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Load the config for a scan root.
///
/// Returns the default config when no file exists.
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid or has unknown keys.
pub fn load_config(root: &Path) -> Result<GofishConfig> {
    match find_config_file(root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No config file in {}, using defaults", root.display());
            Ok(GofishConfig::default())
        }
    }
}

/// Load a single config file and parse it into GofishConfig.
pub fn load_config_file(path: &Path) -> Result<GofishConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into GofishConfig.
///
/// An empty file is the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<GofishConfig> {
    if content.trim().is_empty() {
        return Ok(GofishConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| GofishError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
