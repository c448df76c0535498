//! baler CLI entry point: argument parsing, logging initialization, and
//! command dispatch.

use clap::Parser;
use miette::Result;

use baler_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // NO_COLOR/FORCE_COLOR and TTY detection apply to the logger as well
    let no_color = args.no_color || !ui::should_use_colors();
    logger::init_logger(args.verbose, args.quiet, no_color);
    ui::init_colors(no_color);

    let result = match args.command {
        cli::Command::Plan(plan_args) => commands::plan_execute(plan_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Explain(explain_args) => commands::explain_execute(explain_args),
    };

    result.map_err(error::cli_error_to_miette)
}
