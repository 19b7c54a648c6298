//! Front-end settings stored alongside the project layout.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Disable coloured status output for this project
    #[serde(default)]
    pub no_color: bool,
}
