//! Registry and corpus configuration errors — fatal, pre-scan.

use crate::types::identifiers::{PatternId, RepoId, VariantName};

use super::error_code::{self, CensusErrorCode};

/// Malformed pattern registry or repository list. Aborts the run before any
/// scanning begins.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("duplicate pattern id: {id}")]
    DuplicatePattern { id: PatternId },

    #[error("pattern {pattern} declares duplicate variant: {variant}")]
    DuplicateVariant {
        pattern: PatternId,
        variant: VariantName,
    },

    #[error("pattern id must not be empty")]
    EmptyPatternId,

    #[error("pattern {pattern} declares an empty variant name")]
    EmptyVariantName { pattern: PatternId },

    #[error("pattern {pattern} has invalid applicability glob {glob:?}: {message}")]
    InvalidGlob {
        pattern: PatternId,
        glob: String,
        message: String,
    },

    #[error("pattern {pattern} references undeclared pattern {related} in `related`")]
    UnknownRelated {
        pattern: PatternId,
        related: PatternId,
    },

    #[error("registry parse error: {message}")]
    RegistryParse { message: String },

    #[error("corpus contains no repositories")]
    EmptyCorpus,

    #[error("repository id must not be empty")]
    EmptyRepositoryId,

    #[error("duplicate repository id: {id}")]
    DuplicateRepository { id: RepoId },
}

impl CensusErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicatePattern { .. } => error_code::CONFIG_DUPLICATE_PATTERN,
            Self::DuplicateVariant { .. } => error_code::CONFIG_DUPLICATE_VARIANT,
            Self::EmptyPatternId => error_code::CONFIG_EMPTY_PATTERN_ID,
            Self::EmptyVariantName { .. } => error_code::CONFIG_EMPTY_VARIANT_NAME,
            Self::InvalidGlob { .. } => error_code::CONFIG_INVALID_GLOB,
            Self::UnknownRelated { .. } => error_code::CONFIG_UNKNOWN_RELATED,
            Self::RegistryParse { .. } => error_code::CONFIG_REGISTRY_PARSE,
            Self::EmptyCorpus => error_code::CONFIG_EMPTY_CORPUS,
            Self::EmptyRepositoryId => error_code::CONFIG_EMPTY_REPOSITORY_ID,
            Self::DuplicateRepository { .. } => error_code::CONFIG_DUPLICATE_REPOSITORY,
        }
    }
}
