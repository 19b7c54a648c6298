//! Terminal status messages.
//!
//! # Examples
//!
//! ```no_run
//! use kiln_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Layout is valid");
//! ui::warning("No kiln.toml found, using defaults");
//! ```

mod messages;

pub use messages::{chain, info, success, symbols, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    crate::logger::should_use_colors()
}

/// Apply the color decision to `owo-colors` for the rest of the process.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}
