//! Locating and reading project configuration on disk.
//!
//! A project carries its configuration either in a dedicated `baler.toml` or
//! in a `baler` field of its package manifest. [`find_config`] reports which
//! of the two a directory uses; [`ConfigSource::load`] reads it.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::ProjectConfig;
use crate::error::{ConfigError, Result};

const CONFIG_FILE: &str = "baler.toml";
const MANIFEST_FILE: &str = "package.json";
const MANIFEST_FIELD: &str = "baler";

/// Where a project's configuration lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A dedicated `baler.toml`
    Toml(PathBuf),
    /// The `baler` field of a package manifest
    ManifestField(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Toml(path) | ConfigSource::ManifestField(path) => path,
        }
    }

    /// Read and parse the configuration this source points at.
    pub fn load(&self) -> Result<ProjectConfig> {
        match self {
            ConfigSource::Toml(path) => load_toml(path),
            ConfigSource::ManifestField(path) => load_manifest_field(path),
        }
    }
}

/// Look for configuration under `root`.
///
/// A `baler.toml` wins over a manifest field, so a dedicated file can
/// override settings a shared manifest carries. A manifest without the
/// `baler` field does not count as configuration.
pub fn find_config(root: impl AsRef<Path>) -> Option<ConfigSource> {
    let root = root.as_ref();

    let toml = root.join(CONFIG_FILE);
    if toml.is_file() {
        return Some(ConfigSource::Toml(toml));
    }

    let manifest = root.join(MANIFEST_FILE);
    if manifest_has_field(&manifest) {
        return Some(ConfigSource::ManifestField(manifest));
    }

    None
}

/// Load configuration from an explicit path, dispatching on the filename:
/// a `package.json` is read through its `baler` field, anything else as TOML.
pub fn load_at(path: impl AsRef<Path>) -> Result<ProjectConfig> {
    let path = path.as_ref();
    if path.file_name().is_some_and(|name| name == MANIFEST_FILE) {
        load_manifest_field(path)
    } else {
        load_toml(path)
    }
}

/// Find and load in one step.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] when the root has no configuration.
///
/// # Example
///
/// ```no_run
/// use baler_config::discover;
///
/// let config = discover(".").unwrap();
/// ```
pub fn discover(root: impl AsRef<Path>) -> Result<ProjectConfig> {
    find_config(root).ok_or(ConfigError::NotFound)?.load()
}

fn manifest_has_field(path: &Path) -> bool {
    let Ok(content) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(manifest) = serde_json::from_str::<Value>(&content) else {
        return false;
    };
    manifest
        .get(MANIFEST_FIELD)
        .is_some_and(|field| !field.is_null())
}

fn load_toml(path: &Path) -> Result<ProjectConfig> {
    let content = fs::read_to_string(path)?;

    let parsed: toml::Value = toml::from_str(&content)
        .map_err(|e| ConfigError::InvalidValue(format!("{}: {e}", path.display())))?;

    // serde bridge: ProjectConfig deserializes from JSON values
    let value = serde_json::to_value(parsed).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

    ProjectConfig::from_value(value)
}

fn load_manifest_field(path: &Path) -> Result<ProjectConfig> {
    let content = fs::read_to_string(path)?;

    let manifest: Value = serde_json::from_str(&content)
        .map_err(|e| ConfigError::InvalidValue(format!("{}: {e}", path.display())))?;

    match manifest.get(MANIFEST_FIELD) {
        Some(field) if !field.is_null() => ProjectConfig::from_value(field.clone()),
        _ => Err(ConfigError::InvalidValue(format!(
            "{} has no '{MANIFEST_FIELD}' field",
            path.display()
        ))),
    }
}
