//! Per-file snapshot types produced by the repository walker.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Role hints assigned to a file from its path shape.
///
/// An explicit tagged classification — extractors branch on roles instead of
/// re-deriving "what is this file" ad hoc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileRole {
    Route,
    Layout,
    Component,
    Test,
    Style,
    LintConfig,
    TypeConfig,
    Lockfile,
    Manifest,
    Locale,
    Documentation,
}

/// Read-only snapshot of one file within a repository.
///
/// Owned by its repository for the duration of a run and discarded at run
/// end; never mutated by extractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Repository-relative path, `/`-separated on every platform.
    pub path: String,
    /// Lowercased extension without the dot; empty when absent.
    pub extension: String,
    /// Size in bytes.
    pub size: u64,
    /// Role hints from path classification.
    pub roles: SmallVec<[FileRole; 2]>,
}

impl SourceFile {
    pub fn has_role(&self, role: FileRole) -> bool {
        self.roles.contains(&role)
    }

    /// Final path component.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(self.path.as_str())
    }

    /// Non-empty path components, in order.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|c| !c.is_empty())
    }
}
