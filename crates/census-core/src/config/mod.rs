//! Run and walker configuration.

mod run_config;
mod walk_config;

pub use run_config::{RunConfig, TimeoutPolicy};
pub use walk_config::WalkConfig;
