//! Evidence units emitted by extractors.

use serde::{Deserialize, Serialize};

use crate::types::identifiers::{PatternId, RepoId, VariantName};

/// A unit of evidence that a specific file exhibits a specific pattern
/// variant.
///
/// Duplicates are legal and never deduplicated at capture time; the
/// aggregator reduces them to repository presence and keeps raw counts as
/// supplementary detail only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatternSignal {
    pub pattern: PatternId,
    /// Declared variant; `None` for presence-based patterns.
    pub variant: Option<VariantName>,
    pub repository: RepoId,
    /// Repository-relative path of the evidence; `.` for repository-level
    /// evidence without a single anchoring file.
    pub file: String,
    /// Human-oriented supplementary detail.
    pub detail: String,
}
