//! Core bundle configuration types shared across baler crates.

mod helpers;
mod html;
mod types;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use html::HtmlOptions;
pub use types::{EsTarget, SourceMapOptions};

use helpers::{
    default_context, default_entries, default_filename_template, default_output_dir,
    default_public_path, default_resolve_extensions, default_static_dir, default_static_subdir,
    default_true,
};

/// Main bundle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleOptions {
    /// Source root; entry modules and the HTML template resolve against it
    #[serde(default = "default_context")]
    pub context: PathBuf,

    /// Named entry points, each an ordered list of module specifiers
    #[serde(default = "default_entries")]
    pub entries: IndexMap<String, Vec<String>>,

    /// Prepend a polyfill module to every entry point
    #[serde(default = "default_true")]
    pub polyfill: bool,

    /// Output directory for generated bundles
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Script bundle filename template with `[name]` and `[contenthash]`
    /// placeholders
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Directory containing static assets copied into the output directory
    #[serde(default = "default_static_dir")]
    pub static_dir: Option<PathBuf>,

    /// Subdirectory of the output tree that mirrors `static_dir`
    #[serde(default = "default_static_subdir")]
    pub static_subdir: String,

    /// Base serving path for extracted stylesheets
    #[serde(default = "default_public_path")]
    pub public_path: String,

    /// Extensions tried when resolving extensionless imports
    #[serde(default = "default_resolve_extensions")]
    pub resolve_extensions: Vec<String>,

    /// Path aliases for import resolution (e.g., "@models" → "src/models")
    #[serde(default)]
    pub path_aliases: IndexMap<String, PathBuf>,

    /// Target syntax level for the script transform chain
    #[serde(default)]
    pub target: EsTarget,

    /// HTML entry-point templating configuration
    #[serde(default)]
    pub html: HtmlOptions,
}

impl BundleOptions {
    /// Add a named entry point
    ///
    /// # Example
    /// ```
    /// use baler_config::BundleOptions;
    ///
    /// let options = BundleOptions::default()
    ///     .with_entry("admin", ["./admin.js"]);
    /// assert!(options.entries.contains_key("admin"));
    /// ```
    pub fn with_entry<I, S>(mut self, name: impl Into<String>, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(name.into(), modules.into_iter().map(Into::into).collect());
        self
    }

    /// Add a path alias for import resolution
    ///
    /// # Example
    /// ```
    /// use baler_config::BundleOptions;
    ///
    /// let options = BundleOptions::default()
    ///     .with_alias("@components", "src/components");
    /// ```
    pub fn with_alias(mut self, alias: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.path_aliases.insert(alias.into(), path.into());
        self
    }

    /// Add the default aliases relative to a base directory
    ///
    /// Sets up:
    /// - @models → base_dir/models
    /// - @ → base_dir
    pub fn with_default_aliases(mut self, base_dir: impl AsRef<std::path::Path>) -> Self {
        let base = base_dir.as_ref();
        self.path_aliases
            .insert("@models".to_string(), base.join("models"));
        self.path_aliases.insert("@".to_string(), base.to_path_buf());
        self
    }
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            context: default_context(),
            entries: default_entries(),
            polyfill: true,
            output_dir: default_output_dir(),
            filename_template: default_filename_template(),
            static_dir: default_static_dir(),
            static_subdir: default_static_subdir(),
            public_path: default_public_path(),
            resolve_extensions: default_resolve_extensions(),
            path_aliases: IndexMap::new(),
            target: EsTarget::default(),
            html: HtmlOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventions() {
        let options = BundleOptions::default();
        assert_eq!(options.context, PathBuf::from("src"));
        assert_eq!(options.output_dir, PathBuf::from("dist"));
        assert_eq!(options.filename_template, "[name].[contenthash].js");
        assert_eq!(options.entries["main"], vec!["./index.js".to_string()]);
        assert_eq!(options.static_dir, Some(PathBuf::from("public")));
    }

    #[test]
    fn with_default_aliases_sets_both_prefixes() {
        let options = BundleOptions::default().with_default_aliases("src");
        assert_eq!(options.path_aliases["@models"], PathBuf::from("src/models"));
        assert_eq!(options.path_aliases["@"], PathBuf::from("src"));
    }

    #[test]
    fn entries_preserve_insertion_order() {
        let options = BundleOptions::default()
            .with_entry("admin", ["./admin.js"])
            .with_entry("worker", ["./worker.js"]);
        let names: Vec<_> = options.entries.keys().cloned().collect();
        assert_eq!(names, ["main", "admin", "worker"]);
    }

    #[test]
    fn deserializes_from_partial_toml() {
        let options: BundleOptions = toml::from_str(
            r#"
            output_dir = "build"
            public_path = "/assets/"
            "#,
        )
        .unwrap();
        assert_eq!(options.output_dir, PathBuf::from("build"));
        assert_eq!(options.public_path, "/assets/");
        // Unspecified fields fall back to defaults
        assert_eq!(options.context, PathBuf::from("src"));
    }
}
