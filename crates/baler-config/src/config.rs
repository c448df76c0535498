//! High-level project configuration.
//!
//! `ProjectConfig` is the declarative root loaded from `baler.toml` (or a
//! `baler` field in `package.json`). Resolving it against a [`Mode`] yields a
//! [`crate::plan::BuildPlan`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::BundleOptions;
use crate::dev::DevServerOptions;
use crate::error::{ConfigError, Result as ConfigResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub bundle: BundleOptions,

    #[serde(default)]
    pub dev: Option<DevServerOptions>,

    /// Emit the bundle-size analyzer on production builds
    #[serde(default)]
    pub analyze: bool,
}

impl ProjectConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use baler_config::ProjectConfig;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let value = json!({
    ///     "bundle": {
    ///         "output_dir": "build"
    ///     }
    /// });
    ///
    /// let config = ProjectConfig::from_value(value).unwrap();
    /// assert_eq!(config.bundle.output_dir, PathBuf::from("build"));
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}
