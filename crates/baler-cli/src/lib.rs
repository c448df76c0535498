//! baler CLI - assemble and inspect bundler build plans.
//!
//! This crate provides the command-line interface around `baler-config`:
//! it loads project configuration, resolves the build mode, assembles the
//! effective build plan, and prints or validates it.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`config`] - layered configuration loading (defaults < file < env < CLI)
//! - [`commands`] - `plan`, `check`, and `explain` implementations
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - terminal status messages

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
