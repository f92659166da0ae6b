//! Extraction contexts — what extractors are allowed to see.

use census_core::types::identifiers::{PatternId, RepoId, VariantName};
use census_core::types::signal::PatternSignal;
use census_core::types::source::{FileRole, SourceFile};

/// Everything a file-scoped extractor may inspect.
pub struct FileContext<'a> {
    pub repository: &'a RepoId,
    pub file: &'a SourceFile,
    /// File content; `None` when unreadable, binary, or over the size cap.
    pub content: Option<&'a str>,
}

impl FileContext<'_> {
    /// A signal anchored to this file.
    pub fn signal(
        &self,
        pattern: &PatternId,
        variant: Option<VariantName>,
        detail: impl Into<String>,
    ) -> PatternSignal {
        PatternSignal {
            pattern: pattern.clone(),
            variant,
            repository: self.repository.clone(),
            file: self.file.path.clone(),
            detail: detail.into(),
        }
    }
}

/// Whole-repository view handed to repository-scoped extractors after the
/// per-repository barrier.
pub struct RepositoryView<'a> {
    pub repository: &'a RepoId,
    pub files: &'a [SourceFile],
    /// Signals collected during the file-scoped phase for this repository.
    pub file_signals: &'a [PatternSignal],
}

impl RepositoryView<'_> {
    pub fn signal(
        &self,
        pattern: &PatternId,
        variant: Option<VariantName>,
        file: impl Into<String>,
        detail: impl Into<String>,
    ) -> PatternSignal {
        PatternSignal {
            pattern: pattern.clone(),
            variant,
            repository: self.repository.clone(),
            file: file.into(),
            detail: detail.into(),
        }
    }

    pub fn files_with_role(&self, role: FileRole) -> impl Iterator<Item = &SourceFile> {
        self.files.iter().filter(move |f| f.has_role(role))
    }
}
