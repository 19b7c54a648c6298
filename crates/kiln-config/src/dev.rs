//! Development server description.
//!
//! Only the settings are resolved here; the server and its rebuild loop live
//! outside this crate.

use serde::{Deserialize, Serialize};

use crate::mode::BuildMode;

/// Dev server settings as written in the project layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl DevConfig {
    pub fn resolve(&self, mode: BuildMode) -> DevServer {
        DevServer {
            host: self.host.clone(),
            port: self.port,
            hot: mode.hot_reload(),
        }
    }
}

/// Dev server settings after the mode has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServer {
    pub host: String,
    pub port: u16,
    pub hot: bool,
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    3000
}
