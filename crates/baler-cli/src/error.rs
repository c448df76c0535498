//! Error handling for the baler CLI.
//!
//! `CliError` wraps the domain errors from `baler-config` and the CLI's own
//! failure modes; conversion is automatic via `#[from]`. `main` converts the
//! final error into a miette report.

use std::path::PathBuf;

use baler_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert CliError to a miette Report for terminal error reporting.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Config(ConfigError::NotFound) => miette::miette!(
            "No configuration found\n\nHint: create a baler.toml or add a 'baler' field to package.json"
        ),
        CliError::Config(ConfigError::SchemaValidation { message, hint }) => match hint {
            Some(hint) => miette::miette!("Schema validation failed: {message}\n\nHint: {hint}"),
            None => miette::miette!("Schema validation failed: {message}"),
        },
        other => miette::miette!("{other}"),
    }
}
