//! Project layout: the fixed filesystem roots a build starts from.
//!
//! Defaults describe a conventional single-page project (`src/index.js`,
//! `src/index.html`, `src/favicon.ico`, output in `dist/`). For file
//! discovery, see the `discovery` module.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::alias::AliasRoot;
use crate::dev::DevConfig;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::settings::GlobalSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KilnConfig {
    /// Source root; entries, template and static assets are relative to it
    #[serde(default = "default_context")]
    pub context: PathBuf,

    /// Entry requests, in load order. `./`-relative entries resolve against
    /// `context`; bare names are module requests.
    #[serde(default = "default_entries")]
    pub entries: Vec<String>,

    /// Output directory, relative to the project root
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// HTML template for the generated entry document
    #[serde(default = "default_template")]
    pub template: PathBuf,

    /// Files copied verbatim into the output directory
    #[serde(default = "default_static_assets")]
    pub static_assets: Vec<PathBuf>,

    /// Extensions tried when an import omits one
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Path aliases, relative to the project root. Kept as a list so that a
    /// repeated name is reported instead of silently overwritten.
    #[serde(default = "default_aliases")]
    pub aliases: Vec<AliasRoot>,

    #[serde(default)]
    pub dev: DevConfig,

    #[serde(default)]
    pub settings: GlobalSettings,
}

impl Default for KilnConfig {
    fn default() -> Self {
        Self {
            context: default_context(),
            entries: default_entries(),
            output_dir: default_output_dir(),
            template: default_template(),
            static_assets: default_static_assets(),
            extensions: default_extensions(),
            aliases: default_aliases(),
            dev: DevConfig::default(),
            settings: GlobalSettings::default(),
        }
    }
}

impl KilnConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::KilnConfig;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let value = json!({
    ///     "output_dir": "public",
    ///     "static_assets": ["favicon.ico", "robots.txt"]
    /// });
    ///
    /// let config = KilnConfig::from_value(value).unwrap();
    /// assert_eq!(config.output_dir, PathBuf::from("public"));
    /// assert_eq!(config.entries, vec!["@babel/polyfill", "./index.js"]);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Append a path alias.
    ///
    /// # Example
    /// ```
    /// use kiln_config::KilnConfig;
    ///
    /// let config = KilnConfig::default().with_alias("@ui", "src/ui");
    /// assert_eq!(config.aliases.len(), 3);
    /// ```
    pub fn with_alias(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.aliases.push(AliasRoot::new(name, path));
        self
    }

    pub fn with_static_asset(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_assets.push(path.into());
        self
    }
}

fn default_context() -> PathBuf {
    PathBuf::from("src")
}

fn default_entries() -> Vec<String> {
    vec!["@babel/polyfill".to_string(), "./index.js".to_string()]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_template() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_static_assets() -> Vec<PathBuf> {
    vec![PathBuf::from("favicon.ico")]
}

fn default_extensions() -> Vec<String> {
    vec![".js".to_string()]
}

fn default_aliases() -> Vec<AliasRoot> {
    vec![
        AliasRoot::new("@", "src"),
        AliasRoot::new("@core", "src/core"),
    ]
}
