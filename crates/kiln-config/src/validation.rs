//! Pluggable layout validation strategies
//!
//! Separates schema validation (no filesystem access) from filesystem
//! validation (template, static assets, alias targets must exist).

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::alias::{is_within, resolve_aliases, AliasTable};
use crate::config::KilnConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable layout validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &KilnConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use kiln_config::{ConfigValidator, KilnConfig, SchemaValidator};
///
/// SchemaValidator.validate(&KilnConfig::default()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &KilnConfig) -> Result<()> {
        if config.entries.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        if config.entries.iter().any(|entry| entry.trim().is_empty()) {
            return Err(ConfigError::SchemaValidation {
                message: "entry requests cannot be empty".to_string(),
                hint: Some("Remove empty strings from the 'entries' array".to_string()),
            });
        }

        if config.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "output_dir cannot be empty".to_string(),
                hint: Some("Set output_dir, e.g. \"dist\"".to_string()),
            });
        }

        if config.template.as_os_str().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "template cannot be empty".to_string(),
                hint: Some("Point template at an HTML file inside the context".to_string()),
            });
        }

        if config.extensions.is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "at least one resolvable extension is required".to_string(),
                hint: Some("Use extensions = [\".js\"]".to_string()),
            });
        }

        for extension in &config.extensions {
            if !extension.starts_with('.') || extension.len() < 2 {
                return Err(ConfigError::SchemaValidation {
                    message: format!("invalid extension '{extension}'"),
                    hint: Some("Extensions start with a dot, e.g. \".js\"".to_string()),
                });
            }
        }

        for alias in &config.aliases {
            if alias.name.trim().is_empty() {
                return Err(ConfigError::EmptyAlias {
                    path: alias.path.clone(),
                });
            }
        }

        if config.dev.port == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "dev.port cannot be 0".to_string(),
                hint: Some("Pick a fixed port such as 3000".to_string()),
            });
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, builds the alias table, then checks that the
/// output directory is safe to clear and that the template, every static
/// asset and every alias target exist on disk.
///
/// # Example
///
/// ```no_run
/// use kiln_config::{ConfigValidator, FsValidator, KilnConfig};
///
/// let validator = FsValidator::new(".");
/// validator.validate(&KilnConfig::default()).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a project root
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().clean(),
        }
    }

    /// Filesystem checks against an already-resolved alias table.
    pub(crate) fn check_paths(&self, config: &KilnConfig, aliases: &AliasTable) -> Result<()> {
        check_output_dir(&self.root, config)?;

        let context = self.root.join(&config.context);

        let template = context.join(&config.template).clean();
        if !template.is_file() {
            return Err(ConfigError::TemplateNotFound { path: template });
        }

        for asset in &config.static_assets {
            let path = context.join(asset).clean();
            if !path.exists() {
                return Err(ConfigError::StaticAssetNotFound { path });
            }
        }

        for (name, target) in aliases.iter() {
            if !target.exists() {
                return Err(ConfigError::AliasTargetNotFound {
                    name: name.to_string(),
                    path: target.to_path_buf(),
                });
            }
        }

        Ok(())
    }
}

/// The output directory is cleared before every build, so it must sit
/// strictly below the project root and must not be, or contain, the context.
fn check_output_dir(root: &Path, config: &KilnConfig) -> Result<()> {
    let output_root = root.join(&config.output_dir).clean();
    let context = root.join(&config.context).clean();

    if output_root == root || !is_within(root, &output_root) || context.starts_with(&output_root) {
        return Err(ConfigError::UnsafeOutputDir { path: output_root });
    }

    Ok(())
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &KilnConfig) -> Result<()> {
        SchemaValidator.validate(config)?;
        let aliases = resolve_aliases(&self.root, &config.aliases)?;
        self.check_paths(config, &aliases)
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &KilnConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &KilnConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
