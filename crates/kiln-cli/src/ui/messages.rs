//! Status lines written to stderr.
//!
//! Colour goes through `if_supports_color`, so the override installed by
//! [`super::init_colors`] decides whether escape codes are emitted.

use owo_colors::{OwoColorize, Stream};

pub mod symbols {
    pub const SUCCESS: &str = "✓";
    pub const INFO: &str = "ℹ";
    pub const WARNING: &str = "⚠";
}

/// Print a success message to stderr.
///
/// # Examples
///
/// ```no_run
/// use kiln_cli::ui::success;
///
/// success("Layout is valid");
/// ```
pub fn success(message: &str) {
    eprintln!(
        "{} {}",
        symbols::SUCCESS.if_supports_color(Stream::Stderr, |s| s.green()),
        message
    );
}

pub fn info(message: &str) {
    eprintln!(
        "{} {}",
        symbols::INFO.if_supports_color(Stream::Stderr, |s| s.blue()),
        message
    );
}

pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
        message.if_supports_color(Stream::Stderr, |s| s.yellow())
    );
}

/// One `label: a -> b -> c` line, label dimmed.
pub fn chain(label: &str, steps: &[&str]) {
    eprintln!(
        "  {}: {}",
        label.if_supports_color(Stream::Stderr, |s| s.dimmed()),
        steps.join(" -> ")
    );
}
