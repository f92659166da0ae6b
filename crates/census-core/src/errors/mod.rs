//! Error taxonomy.
//!
//! File- and subtree-level problems are recovered locally and surfaced as
//! warnings; registry/config-level problems abort the run with no partial
//! output.

pub mod error_code;

mod aggregation_error;
mod config_error;
mod extract_error;
mod run_error;
mod walk_error;

pub use aggregation_error::AggregationError;
pub use config_error::ConfigError;
pub use extract_error::ExtractError;
pub use run_error::RunError;
pub use walk_error::WalkError;
