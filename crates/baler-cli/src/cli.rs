//! Command-line interface definition for baler.
//!
//! Defines the CLI structure with clap v4 derive macros.
//!
//! # Command Structure
//!
//! - `baler plan` - Resolve and print the effective build plan
//! - `baler check` - Validate configuration and input files
//! - `baler explain` - Show the loader chain selected for a file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use baler_config::Mode;

/// baler - assemble build plans for web-asset bundling
#[derive(Parser, Debug)]
#[command(
    name = "baler",
    version,
    about = "Assemble build plans for web-asset bundling",
    long_about = "baler turns a small declarative project configuration into a complete\n\
                  build plan: mode-conditioned optimizations, a loader rule table, an\n\
                  ordered plugin list, and output naming with content hashes."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available baler subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the effective build plan and print it
    ///
    /// Loads the project configuration, resolves the build mode, and prints
    /// the assembled plan as JSON (or a human summary with --summary).
    Plan(PlanArgs),

    /// Validate configuration and input files
    ///
    /// Runs schema validation and checks that the HTML template, static
    /// assets directory, and entry modules exist on disk.
    Check(CheckArgs),

    /// Show the loader chain selected for a file
    ///
    /// Evaluates the rule table top-to-bottom and prints the first matching
    /// chain, or reports that no rule fires.
    Explain(ExplainArgs),
}

/// Build mode as a CLI value
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Unminified output, source maps, hot reload
    Development,
    /// Minified, content-hashed output
    Production,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Development => Mode::Development,
            ModeArg::Production => Mode::Production,
        }
    }
}

/// Arguments shared by commands that load configuration
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Path to the configuration file
    ///
    /// Defaults to baler.toml (or a 'baler' field in package.json) found in
    /// the project root.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root directory
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Build mode; overrides the BALER_MODE environment variable
    #[arg(short, long, value_enum, value_name = "MODE")]
    pub mode: Option<ModeArg>,

    /// Enable the bundle-size analyzer (production builds only)
    #[arg(long)]
    pub analyze: bool,

    /// Print a human-readable summary instead of JSON
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the explain command
#[derive(Args, Debug)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// File path to match against the rule table
    #[arg(required = true, value_name = "FILE")]
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn plan_accepts_mode_flag() {
        let cli = Cli::parse_from(["baler", "plan", "--mode", "development"]);
        match cli.command {
            Command::Plan(args) => assert_eq!(args.mode, Some(ModeArg::Development)),
            _ => panic!("expected plan command"),
        }
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["baler", "-v", "-q", "plan"]);
        assert!(result.is_err());
    }

    #[test]
    fn explain_requires_a_file() {
        let result = Cli::try_parse_from(["baler", "explain"]);
        assert!(result.is_err());
    }

    #[test]
    fn mode_arg_converts_to_mode() {
        assert_eq!(Mode::from(ModeArg::Development), Mode::Development);
        assert_eq!(Mode::from(ModeArg::Production), Mode::Production);
    }
}
