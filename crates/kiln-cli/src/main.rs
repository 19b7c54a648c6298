//! Kiln CLI - mode-aware build configuration resolver.
//!
//! Parses arguments, initialises logging, reads the mode signal once and
//! dispatches to a command.

use clap::Parser;
use kiln_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    // The only read of the mode signal; everything below receives it as a value.
    let signal = std::env::var(kiln_config::MODE_ENV_VAR).ok();

    let result = match args.command {
        cli::Command::Plan(plan_args) => commands::plan_execute(plan_args, signal.as_deref()),
        cli::Command::Check(check_args) => commands::check_execute(check_args, signal.as_deref()),
    };

    result.map_err(error::cli_error_to_miette)
}
