//! Build plan assembly.
//!
//! A `BuildPlan` is the fully resolved, serializable configuration handed to
//! the bundler: the mode gates the optimization policy, source maps, plugin
//! list, and dev-server settings; the rule table is static.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bundle::{BundleOptions, SourceMapOptions};
use crate::config::ProjectConfig;
use crate::dev::DevServerOptions;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::mode::Mode;
use crate::optimize::Optimization;
use crate::plugins::PluginList;
use crate::rules::RuleTable;

/// Module prepended to every entry point when polyfills are enabled.
pub const POLYFILL_MODULE: &str = "core-js/stable";

/// The resolved build plan for one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildPlan {
    pub mode: Mode,
    pub bundle: BundleOptions,
    pub source_maps: SourceMapOptions,
    pub optimization: Optimization,
    pub rules: RuleTable,
    pub plugins: PluginList,
    pub dev_server: DevServerOptions,
}

impl BuildPlan {
    /// Resolve a project configuration against a mode.
    pub fn assemble(mode: Mode, config: &ProjectConfig) -> Self {
        let mut bundle = config.bundle.clone();

        if bundle.path_aliases.is_empty() {
            let context = bundle.context.clone();
            bundle = bundle.with_default_aliases(context);
        }

        if bundle.polyfill {
            for modules in bundle.entries.values_mut() {
                if modules.first().map(String::as_str) != Some(POLYFILL_MODULE) {
                    modules.insert(0, POLYFILL_MODULE.to_string());
                }
            }
        }

        let rules = RuleTable::standard(&bundle);
        let plugins = PluginList::for_mode(mode, &bundle, config.analyze);
        let dev_server = config
            .dev
            .clone()
            .map(|dev| dev.resolve(mode))
            .unwrap_or_else(|| DevServerOptions::for_mode(mode));

        debug!(%mode, rules = rules.rules.len(), plugins = plugins.plugins.len(), "assembled build plan");

        Self {
            mode,
            bundle,
            source_maps: SourceMapOptions::for_mode(mode),
            optimization: Optimization::for_mode(mode),
            rules,
            plugins,
            dev_server,
        }
    }

    /// Convert to serde_json::Value for emission.
    pub fn to_value(&self) -> ConfigResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimize::Minimizer;
    use std::path::PathBuf;

    #[test]
    fn development_plan_is_unminified_with_source_maps() {
        let plan = BuildPlan::assemble(Mode::Development, &ProjectConfig::default());
        assert!(plan.optimization.minimizers.is_empty());
        assert_eq!(plan.source_maps, SourceMapOptions::External);
        assert!(plan.dev_server.hot);
    }

    #[test]
    fn production_plan_minifies_without_source_maps() {
        let plan = BuildPlan::assemble(Mode::Production, &ProjectConfig::default());
        assert_eq!(
            plan.optimization.minimizers,
            vec![Minimizer::CssOptimizer, Minimizer::ScriptMinifier]
        );
        assert_eq!(plan.source_maps, SourceMapOptions::None);
        assert!(!plan.dev_server.hot);
    }

    #[test]
    fn polyfill_is_prepended_once() {
        let plan = BuildPlan::assemble(Mode::Development, &ProjectConfig::default());
        let main = &plan.bundle.entries["main"];
        assert_eq!(main[0], POLYFILL_MODULE);
        assert_eq!(main.iter().filter(|m| *m == POLYFILL_MODULE).count(), 1);
    }

    #[test]
    fn polyfill_can_be_disabled() {
        let mut config = ProjectConfig::default();
        config.bundle.polyfill = false;
        let plan = BuildPlan::assemble(Mode::Development, &config);
        assert_eq!(plan.bundle.entries["main"], vec!["./index.js".to_string()]);
    }

    #[test]
    fn default_aliases_derive_from_context() {
        let plan = BuildPlan::assemble(Mode::Development, &ProjectConfig::default());
        assert_eq!(
            plan.bundle.path_aliases["@models"],
            PathBuf::from("src/models")
        );
        assert_eq!(plan.bundle.path_aliases["@"], PathBuf::from("src"));
    }

    #[test]
    fn explicit_aliases_are_kept() {
        let mut config = ProjectConfig::default();
        config.bundle = config.bundle.with_alias("@ui", "src/ui");
        let plan = BuildPlan::assemble(Mode::Development, &config);
        assert_eq!(plan.bundle.path_aliases["@ui"], PathBuf::from("src/ui"));
        assert!(!plan.bundle.path_aliases.contains_key("@models"));
    }

    #[test]
    fn explicit_dev_settings_survive_resolution() {
        let mut config = ProjectConfig::default();
        config.dev = Some(DevServerOptions {
            port: 3000,
            hot: false,
            ..Default::default()
        });
        let plan = BuildPlan::assemble(Mode::Development, &config);
        assert_eq!(plan.dev_server.port, 3000);
        // hot is re-derived from the mode, not taken from the file
        assert!(plan.dev_server.hot);
    }

    #[test]
    fn plan_serializes_to_json() {
        let plan = BuildPlan::assemble(Mode::Production, &ProjectConfig::default());
        let value = plan.to_value().unwrap();
        assert_eq!(value["mode"], serde_json::json!("production"));
        assert!(value["rules"]["rules"].as_array().unwrap().len() >= 7);
    }
}
