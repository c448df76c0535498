//! Layered configuration loading.
//!
//! Priority: CLI flags > `BALER_*` environment variables > config file >
//! defaults. The file itself is located through `baler-config`'s discovery
//! (baler.toml, then a `baler` field in package.json); figment layers the
//! environment and CLI overrides on top.
//!
//! Environment keys use `__` as the section separator so field names keep
//! their underscores: `BALER_BUNDLE__OUTPUT_DIR=build` sets
//! `bundle.output_dir`.

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use tracing::debug;

use baler_config::{discovery, ConfigError, ProjectConfig};

use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};

/// Load the project configuration for a command invocation.
pub fn load_config(args: &ConfigArgs) -> Result<ProjectConfig> {
    let file_config = match &args.config {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.clone()));
            }
            Some(discovery::load_at(path)?)
        }
        None => match discovery::find_config(&args.root) {
            Some(source) => {
                debug!(path = %source.path().display(), "discovered config");
                Some(source.load()?)
            }
            // Zero-config projects fall back to the defaults
            None => None,
        },
    };

    let mut figment = Figment::new().merge(Serialized::defaults(ProjectConfig::default()));

    if let Some(config) = file_config {
        figment = figment.merge(Serialized::defaults(config));
    }

    figment = figment.merge(Env::prefixed("BALER_").split("__"));

    figment
        .extract()
        .map_err(|e| CliError::Config(ConfigError::InvalidValue(e.to_string())))
}
