//! Mode-aware build configuration resolver.
//!
//! Given a [`BuildMode`] and a project layout, [`Resolver`] derives the entry
//! points, output naming, per-file-type transform chains and the ordered
//! orchestration plan a build executor needs. Nothing here performs the
//! build itself.

pub mod alias;
pub mod chain;
pub mod config;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod mode;
pub mod naming;
pub mod plan;
pub mod resolver;
pub mod settings;
pub mod validation;

// Re-export main types
pub use alias::*;
pub use chain::*;
pub use config::*;
pub use dev::*;
pub use error::*;
pub use mode::*;
pub use naming::*;
pub use plan::*;
pub use resolver::*;
pub use settings::*;

// Re-export discovery and validation
pub use discovery::{discover, ConfigDiscovery, CONFIG_FILE};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
