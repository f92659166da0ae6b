//! Repository walking errors.

use std::path::PathBuf;

use super::error_code::{self, CensusErrorCode};

/// Errors raised while enumerating one repository tree.
///
/// Fatal only for the affected repository; the run continues over its peers.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("repository root unreadable: {path}: {message}")]
    RootUnreadable { path: PathBuf, message: String },
}

impl CensusErrorCode for WalkError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RootUnreadable { .. } => error_code::WALK_ROOT_UNREADABLE,
        }
    }
}
