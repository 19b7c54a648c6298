//! Command implementations for the Kiln CLI.
//!
//! - `plan`: Resolve the build description and print it as JSON
//! - `check`: Validate the project layout and summarise the resolved build

pub mod check;
pub mod plan;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use plan::execute as plan_execute;
