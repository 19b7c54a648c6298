//! Command-line interface definition for Kiln.
//!
//! # Command Structure
//!
//! - `kiln plan` - Print the resolved build configuration as JSON
//! - `kiln check` - Validate the project layout and summarise the plan
//!
//! The build mode is not a flag: it comes from `NODE_ENV`, read once by the
//! binary entry point.

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, PlanArgs, ProjectArgs};

/// Kiln - mode-aware build configuration resolver
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Resolve a mode-aware build plan",
    long_about = "Kiln resolves entry points, output naming, transform chains and the\n\
                  orchestration plan for a project. Set NODE_ENV=production for a\n\
                  production build; anything else resolves a development build."
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
