//! Finding classification — deterministic, ordered rule evaluation.

mod rules;

pub use rules::Classifier;
