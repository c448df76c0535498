//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation
//! (for library use). Missing input files are fatal configuration errors —
//! the build halts rather than retrying.

use std::path::Path;

use crate::config::ProjectConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate a project configuration
    fn validate(&self, config: &ProjectConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use baler_config::{ProjectConfig, SchemaValidator, ConfigValidator};
///
/// let config = ProjectConfig::default();
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &ProjectConfig) -> Result<()> {
        let bundle = &config.bundle;

        if bundle.entries.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for (name, modules) in &bundle.entries {
            if name.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "entry names cannot be empty".to_string(),
                    hint: Some("Name each entry point, e.g. [bundle.entries.main]".to_string()),
                });
            }
            if modules.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("entry '{name}' has no modules"),
                    hint: Some("List at least one module specifier per entry".to_string()),
                });
            }
        }

        // Without a content hash, stale bundles survive cache invalidation
        if !bundle.filename_template.contains("[contenthash]") {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "filename template '{}' has no [contenthash] placeholder",
                    bundle.filename_template
                ),
                hint: Some("Use a template like [name].[contenthash].js".to_string()),
            });
        }

        for alias in bundle.path_aliases.keys() {
            if alias.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "path alias prefixes cannot be empty".to_string(),
                    hint: Some("Remove the empty alias entry".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Validates that the HTML template, static assets directory, and relative
/// entry modules exist on disk under the context directory.
///
/// # Example
///
/// ```no_run
/// use baler_config::{ProjectConfig, FsValidator, ConfigValidator};
///
/// let config = ProjectConfig::default();
/// let validator = FsValidator::new(".");
/// validator.validate(&config).unwrap();
/// ```
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &ProjectConfig) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(config)?;

        let bundle = &config.bundle;
        let context = self.root.join(&bundle.context);

        let template = context.join(&bundle.html.template);
        if !template.exists() {
            return Err(ConfigError::TemplateNotFound(template));
        }

        if let Some(static_dir) = &bundle.static_dir {
            let path = self.root.join(static_dir);
            if !path.exists() {
                return Err(ConfigError::StaticDirNotFound(path));
            }
        }

        for modules in bundle.entries.values() {
            for module in modules {
                // Bare specifiers (polyfills, packages) resolve elsewhere
                if !module.starts_with("./") && !module.starts_with("../") {
                    continue;
                }
                let path = context.join(module);
                if !path.exists() {
                    return Err(ConfigError::EntryNotFound(path));
                }
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &ProjectConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
///
/// # Example
///
/// ```no_run
/// use baler_config::{ProjectConfig, validate_fs};
///
/// let config = ProjectConfig::default();
/// validate_fs(&config, ".").unwrap();
/// ```
pub fn validate_fs(config: &ProjectConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn schema_validator_accepts_defaults() {
        assert!(SchemaValidator.validate(&ProjectConfig::default()).is_ok());
    }

    #[test]
    fn schema_validator_rejects_empty_entries() {
        let mut config = ProjectConfig::default();
        config.bundle.entries = IndexMap::new();
        let result = SchemaValidator.validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::NoEntries));
    }

    #[test]
    fn schema_validator_rejects_entry_without_modules() {
        let mut config = ProjectConfig::default();
        config.bundle.entries.insert("admin".to_string(), vec![]);
        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_requires_contenthash_placeholder() {
        let mut config = ProjectConfig::default();
        config.bundle.filename_template = "[name].js".to_string();
        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_empty_alias() {
        let mut config = ProjectConfig::default();
        config.bundle = config.bundle.with_alias("  ", "src");
        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }
}
