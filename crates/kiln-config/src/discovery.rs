//! File-based layout discovery for CLI use
//!
//! Handles finding and loading Kiln layout files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use figment::providers::{Format, Json, Serialized, Toml};
use figment::Figment;
use serde_json::Value;

use crate::config::KilnConfig;
use crate::error::{ConfigError, Result};

/// Name of the dedicated layout file.
pub const CONFIG_FILE: &str = "kiln.toml";

/// Field holding the layout inside `package.json`.
pub const PACKAGE_JSON_FIELD: &str = "kiln";

/// File-based configuration discovery
///
/// Searches for a layout file in conventional locations and layers it over
/// [`KilnConfig::default`]. Library users can build a [`KilnConfig`]
/// directly instead.
///
/// # Example
///
/// ```no_run
/// use kiln_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load_or_default().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a layout file in the root directory
    ///
    /// Searches in this order:
    /// 1. kiln.toml
    /// 2. package.json (kiln field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|field| !field.is_null())
                    {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load the discovered layout file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no layout file is found.
    pub fn load(&self) -> Result<KilnConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load the discovered layout file, or the defaults when there is none
    pub fn load_or_default(&self) -> Result<KilnConfig> {
        match self.find() {
            Some(path) => self.load_from(&path),
            None => {
                tracing::debug!(root = %self.root.display(), "no layout file, using defaults");
                Ok(KilnConfig::default())
            }
        }
    }

    /// Load a layout from a specific file path
    pub fn load_from(&self, path: &Path) -> Result<KilnConfig> {
        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.load_from_package_json(path);
        }

        if !path.exists() {
            return Err(ConfigError::NotFound);
        }

        tracing::debug!("Loading layout from: {}", path.display());
        extract(defaults().merge(Toml::file(path)), "toml")
    }

    fn load_from_package_json(&self, path: &Path) -> Result<KilnConfig> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {}", e)),
            })?;

        let kiln_value = parsed
            .get(PACKAGE_JSON_FIELD)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("Add a 'kiln' field to your package.json".to_string()),
            })?;

        if kiln_value.is_null() {
            return Err(ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("The 'kiln' field cannot be null".to_string()),
            });
        }

        tracing::debug!("Loading layout from: {}", path.display());
        extract(
            defaults().merge(Json::string(&kiln_value.to_string())),
            PACKAGE_JSON_FIELD,
        )
    }
}

fn defaults() -> Figment {
    Figment::from(Serialized::defaults(KilnConfig::default()))
}

fn extract(figment: Figment, field: &str) -> Result<KilnConfig> {
    figment.extract().map_err(|e| ConfigError::InvalidValue {
        field: field.to_string(),
        hint: Some(e.to_string()),
    })
}

/// Discover and load the layout from the current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use kiln_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<KilnConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_or_default()
}
