//! Check command implementation.
//!
//! Validates the project layout and prints a short summary of what the
//! build would do, without touching the output directory.

use kiln_config::{resolve_mode, AssetKind, ResolvedConfig};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the layout (explicit file, discovered file, or defaults)
/// 2. Resolve it for the current mode, which runs schema, alias, output
///    directory and filesystem validation
/// 3. Report the mode, output names, transform chains and plan
///
/// # Errors
///
/// Returns the first validation error encountered.
pub fn execute(args: CheckArgs, signal: Option<&str>) -> Result<()> {
    let mode = resolve_mode(signal);
    let resolver = utils::load_resolver(&args.project)?;

    ui::info(&format!("Checking layout for {mode} mode..."));
    let resolved = resolver.resolve(mode)?;

    ui::success("Layout is valid!");
    report(&resolved);
    Ok(())
}

fn report(resolved: &ResolvedConfig) {
    ui::info(&format!(
        "Output: {} ({}, {})",
        resolved.output.path.display(),
        resolved.output.filename,
        resolved.output.naming.template(AssetKind::Stylesheet)
    ));

    for (pattern, chain) in resolved.rules.iter() {
        ui::chain(pattern.name(), &chain.names());
    }
    ui::chain("plan", &resolved.plugins.names());

    if resolved.resolve.aliases.is_empty() {
        ui::warning("No path aliases defined");
    }
    for (name, target) in resolved.resolve.aliases.iter() {
        ui::info(&format!("Alias {name} -> {}", target.display()));
    }
}
