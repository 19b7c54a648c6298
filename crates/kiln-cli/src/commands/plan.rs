//! Plan command implementation.
//!
//! Resolves the build description for the current mode and prints it to
//! stdout as JSON.

use std::io::Write;

use kiln_config::resolve_mode;

use crate::cli::PlanArgs;
use crate::commands::utils;
use crate::error::Result;

/// Execute the plan command.
///
/// `signal` is the raw mode signal read by the binary; an unrecognised or
/// absent value selects development.
///
/// # Errors
///
/// Any layout or validation error. Nothing is printed in that case.
pub fn execute(args: PlanArgs, signal: Option<&str>) -> Result<()> {
    let mode = resolve_mode(signal);
    tracing::debug!(%mode, "resolving build plan");

    let resolver = utils::load_resolver(&args.project)?;
    let resolved = resolver.resolve(mode)?;

    let json = if args.compact {
        serde_json::to_string(&resolved)?
    } else {
        serde_json::to_string_pretty(&resolved)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
