use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available Kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved build configuration
    ///
    /// Resolves the layout for the current mode and writes the result to
    /// stdout as JSON, ready to hand to a build executor.
    Plan(PlanArgs),

    /// Validate the project layout
    ///
    /// Checks that the template, static assets and alias targets exist and
    /// prints a short summary of the resolved plan.
    Check(CheckArgs),
}

/// Options shared by every command that resolves a project
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root directory
    #[arg(short = 'C', long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Layout file (defaults to kiln.toml or the "kiln" field of package.json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}
