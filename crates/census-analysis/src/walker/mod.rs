//! Repository walker — file enumeration with exclusion rules.

pub mod roles;
pub mod types;
mod walk;

pub use types::WalkOutcome;
pub use walk::{walk_repository, DEFAULT_IGNORES};
