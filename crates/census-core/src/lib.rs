//! # census-core
//!
//! Foundation crate for the census convention-mining engine.
//! Defines identifiers, corpus and evidence types, the pattern registry,
//! errors, config, and tracing. Every other crate in the workspace depends
//! on this.

pub mod config;
pub mod errors;
pub mod registry;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{RunConfig, TimeoutPolicy, WalkConfig};
pub use errors::error_code::CensusErrorCode;
pub use registry::{ApplicabilityRule, PatternDefinition, PatternRegistry};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::identifiers::{PatternId, RepoId, VariantName};
