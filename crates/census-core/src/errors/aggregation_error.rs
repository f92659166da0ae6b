//! Aggregation validation errors — caught in the pre-run pass, fatal.

use crate::types::identifiers::PatternId;

use super::error_code::{self, CensusErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("applicability predicate of {pattern} references undeclared pattern {referenced}")]
    UndeclaredPredicateReference {
        pattern: PatternId,
        referenced: PatternId,
    },
}

impl CensusErrorCode for AggregationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UndeclaredPredicateReference { .. } => {
                error_code::AGGREGATION_UNDECLARED_REFERENCE
            }
        }
    }
}
