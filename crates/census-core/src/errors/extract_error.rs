//! Extraction errors.

use super::error_code::{self, CensusErrorCode};

/// An extractor could not produce signals for one file.
///
/// Recorded against that file/pattern only; never blocks other extractors
/// or files.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("cannot interpret {file}: {message}")]
    Parse { file: String, message: String },

    #[error("file unreadable: {file}: {message}")]
    Unreadable { file: String, message: String },
}

impl CensusErrorCode for ExtractError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => error_code::EXTRACT_PARSE,
            Self::Unreadable { .. } => error_code::EXTRACT_UNREADABLE,
        }
    }
}
