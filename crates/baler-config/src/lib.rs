pub mod bundle;
pub mod config;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod hash;
pub mod mode;
pub mod optimize;
pub mod plan;
pub mod plugins;
pub mod rules;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use config::*;
pub use dev::*;
pub use error::*;
pub use mode::Mode;
pub use optimize::{ChunkSplit, Minimizer, Optimization};
pub use plan::BuildPlan;
pub use plugins::{Plugin, PluginList};
pub use rules::{Loader, Rule, RuleTable, ScriptTransform};

// Re-export discovery and validation
pub use discovery::{discover, find_config, load_at, ConfigSource};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
