//! Fatal, run-aborting errors.
//!
//! Recoverable problems surface as warnings on the findings document
//! instead; a failed run yields only an error report.

use super::aggregation_error::AggregationError;
use super::config_error::ConfigError;
use super::error_code::{self, CensusErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("aggregation validation error: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("run deadline exceeded after {elapsed_ms}ms with {inconclusive} repository scans unfinished")]
    DeadlineExceeded { elapsed_ms: u64, inconclusive: usize },
}

impl CensusErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Aggregation(e) => e.error_code(),
            Self::DeadlineExceeded { .. } => error_code::RUN_DEADLINE_EXCEEDED,
        }
    }
}
