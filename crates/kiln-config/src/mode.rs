//! Build mode and every value derived from it.
//!
//! The mode is decided once, from an external string signal, and then passed
//! by value into each derivation. Nothing in this crate reads the process
//! environment; the caller owns that.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::naming::{AssetKind, OutputNamingRule};

/// Signal value that selects a production build.
pub const PRODUCTION_SIGNAL: &str = "production";

/// Environment variable conventionally carrying the mode signal.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// Development vs. production build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Stable filenames, source maps, lint step, hot reload (default)
    #[default]
    Development,
    /// Content-hashed filenames, minified HTML, no source maps
    Production,
}

/// Map an external signal to a [`BuildMode`].
///
/// Only the exact literal `"production"` selects [`BuildMode::Production`].
/// Any other value, including a missing one, falls back to development.
///
/// # Example
///
/// ```
/// use kiln_config::{resolve_mode, BuildMode};
///
/// assert_eq!(resolve_mode(Some("production")), BuildMode::Production);
/// assert_eq!(resolve_mode(Some("Production")), BuildMode::Development);
/// assert_eq!(resolve_mode(None), BuildMode::Development);
/// ```
pub fn resolve_mode(signal: Option<&str>) -> BuildMode {
    match signal {
        Some(PRODUCTION_SIGNAL) => BuildMode::Production,
        _ => BuildMode::Development,
    }
}

impl BuildMode {
    pub fn is_production(self) -> bool {
        self == BuildMode::Production
    }

    pub fn is_development(self) -> bool {
        self == BuildMode::Development
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => PRODUCTION_SIGNAL,
        }
    }

    /// Output naming rule active for this mode.
    pub fn naming_rule(self) -> OutputNamingRule {
        match self {
            BuildMode::Development => OutputNamingRule::Stable,
            BuildMode::Production => OutputNamingRule::ContentHashed,
        }
    }

    pub fn source_maps(self) -> SourceMapOptions {
        match self {
            BuildMode::Development => SourceMapOptions::External,
            BuildMode::Production => SourceMapOptions::None,
        }
    }

    pub fn html_minify(self) -> HtmlMinifyOptions {
        HtmlMinifyOptions {
            remove_comments: self.is_production(),
            collapse_whitespace: self.is_production(),
        }
    }

    /// Whether the script chain carries a lint step.
    pub fn lint_scripts(self) -> bool {
        self.is_development()
    }

    /// Whether extracted stylesheets and the dev server hot-reload.
    pub fn hot_reload(self) -> bool {
        self.is_development()
    }

    /// Snapshot of every derived value for this mode.
    pub fn policy(self) -> ModePolicy {
        let naming = self.naming_rule();
        ModePolicy {
            mode: self,
            naming,
            script_filename: naming.template(AssetKind::Script),
            stylesheet_filename: naming.template(AssetKind::Stylesheet),
            source_maps: self.source_maps(),
            html_minify: self.html_minify(),
            lint_scripts: self.lint_scripts(),
            hot_reload: self.hot_reload(),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source map generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMapOptions {
    /// No source maps
    None,
    /// Inline source maps (base64 data URL appended to the bundle)
    Inline,
    /// External .map files, referenced from a trailing comment in the bundle
    #[default]
    External,
}

impl SourceMapOptions {
    pub fn is_enabled(self) -> bool {
        self != SourceMapOptions::None
    }
}

/// Minification applied to the generated HTML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HtmlMinifyOptions {
    pub remove_comments: bool,
    pub collapse_whitespace: bool,
}

impl HtmlMinifyOptions {
    pub fn is_enabled(self) -> bool {
        self.remove_comments || self.collapse_whitespace
    }
}

/// All mode-derived values in one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModePolicy {
    pub mode: BuildMode,
    pub naming: OutputNamingRule,
    pub script_filename: String,
    pub stylesheet_filename: String,
    pub source_maps: SourceMapOptions,
    pub html_minify: HtmlMinifyOptions,
    pub lint_scripts: bool,
    pub hot_reload: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_literal_selects_production() {
        assert_eq!(resolve_mode(Some("production")), BuildMode::Production);
        for signal in ["", "prod", "PRODUCTION", " production", "development", "test"] {
            assert_eq!(resolve_mode(Some(signal)), BuildMode::Development, "{signal:?}");
        }
        assert_eq!(resolve_mode(None), BuildMode::Development);
    }

    #[test]
    fn development_policy() {
        let policy = BuildMode::Development.policy();
        assert_eq!(policy.script_filename, "bundle.js");
        assert_eq!(policy.stylesheet_filename, "bundle.css");
        assert!(policy.source_maps.is_enabled());
        assert!(!policy.html_minify.is_enabled());
        assert!(policy.lint_scripts);
        assert!(policy.hot_reload);
    }

    #[test]
    fn production_policy() {
        let policy = BuildMode::Production.policy();
        assert_eq!(policy.script_filename, "bundle.[hash].js");
        assert_eq!(policy.stylesheet_filename, "bundle.[hash].css");
        assert_eq!(policy.source_maps, SourceMapOptions::None);
        assert!(policy.html_minify.remove_comments);
        assert!(policy.html_minify.collapse_whitespace);
        assert!(!policy.lint_scripts);
        assert!(!policy.hot_reload);
    }

    #[test]
    fn policy_is_deterministic() {
        for mode in [BuildMode::Development, BuildMode::Production] {
            assert_eq!(mode.policy(), mode.policy());
        }
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(BuildMode::Production).unwrap(),
            serde_json::json!("production")
        );
        assert_eq!(BuildMode::Development.to_string(), "development");
    }
}
