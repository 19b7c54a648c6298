//! Error types for configuration resolution and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Alias table errors
    #[error("duplicate alias '{name}': each alias name may only be defined once")]
    DuplicateAlias { name: String },

    #[error("alias name cannot be empty (target: {})", .path.display())]
    EmptyAlias { path: PathBuf },

    #[error("alias '{name}' points outside the project root: {}", .path.display())]
    AliasOutsideRoot { name: String, path: PathBuf },

    #[error("alias '{name}' target not found: {}", .path.display())]
    AliasTargetNotFound { name: String, path: PathBuf },

    // Filesystem validation errors
    #[error("HTML template not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("static asset not found: {}", .path.display())]
    StaticAssetNotFound { path: PathBuf },

    #[error("output directory must be strictly inside the project root and must not contain the source context: {}", .path.display())]
    UnsafeOutputDir { path: PathBuf },

    #[error("unsupported asset type: {}", .path.display())]
    UnsupportedAssetType { path: PathBuf },

    // Layout parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("invalid config value for '{field}'{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    // Schema validation errors (no filesystem checks)
    #[error("no entries specified")]
    NoEntries,

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Suggested fix, when the error carries one.
    pub fn hint(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidValue { hint, .. } | ConfigError::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            ConfigError::DuplicateAlias { .. } => Some("Rename or remove one of the aliases"),
            ConfigError::UnsafeOutputDir { .. } => {
                Some("Point output_dir at a subdirectory such as \"dist\"")
            }
            ConfigError::NotFound => Some("Create a kiln.toml or add a 'kiln' field to package.json"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_alias_names_the_alias() {
        let err = ConfigError::DuplicateAlias { name: "@".into() };
        assert!(err.to_string().contains("'@'"));
        assert!(err.hint().is_some());
    }

    #[test]
    fn invalid_value_renders_hint_inline() {
        let err = ConfigError::InvalidValue {
            field: "toml".into(),
            hint: Some("Invalid TOML syntax".into()),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for 'toml': Invalid TOML syntax"
        );

        let bare = ConfigError::InvalidValue {
            field: "kiln".into(),
            hint: None,
        };
        assert_eq!(bare.to_string(), "invalid config value for 'kiln'");
    }

    #[test]
    fn unsafe_output_dir_shows_path_and_hint() {
        let err = ConfigError::UnsafeOutputDir { path: "/app/src".into() };
        assert!(err.to_string().contains("/app/src"));
        assert!(err.hint().is_some_and(|hint| hint.contains("dist")));
    }
}
