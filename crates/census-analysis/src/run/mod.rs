//! Run orchestration — deadline, per-repository scans, and the pipeline.

pub mod deadline;
pub mod pipeline;

pub use deadline::Deadline;
pub use pipeline::Engine;
