//! Recovered, non-fatal problems surfaced alongside the findings.

use serde::{Deserialize, Serialize};

use crate::types::identifiers::{PatternId, RepoId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    /// Repository root unreadable; the whole repository was skipped.
    RepositorySkipped,
    /// A subtree could not be read; the walk continued around it.
    SubtreeSkipped,
    /// A single file could not be read for content extraction.
    FileUnreadable,
    /// An extractor could not interpret a file's structure.
    ParseFailure,
    /// A signal failed referential-integrity checks against the registry.
    SignalRejected,
    /// A repository scan was cut off by the run deadline and excluded from
    /// all denominators.
    RepositoryInconclusive,
}

impl WarningKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RepositorySkipped => "repository-skipped",
            Self::SubtreeSkipped => "subtree-skipped",
            Self::FileUnreadable => "file-unreadable",
            Self::ParseFailure => "parse-failure",
            Self::SignalRejected => "signal-rejected",
            Self::RepositoryInconclusive => "repository-inconclusive",
        }
    }
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One recovered problem, attached to the findings document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RunWarning {
    pub kind: WarningKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<RepoId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternId>,
    pub message: String,
}

impl RunWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            repository: None,
            file: None,
            pattern: None,
            message: message.into(),
        }
    }

    pub fn with_repository(mut self, repository: RepoId) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_pattern(mut self, pattern: PatternId) -> Self {
        self.pattern = Some(pattern);
        self
    }
}
