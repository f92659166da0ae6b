//! Extractor capability traits.

use census_core::errors::ExtractError;
use census_core::types::identifiers::PatternId;
use census_core::types::signal::PatternSignal;
use census_core::types::source::SourceFile;

use super::context::{FileContext, RepositoryView};

/// A detector that recognizes one structural convention in a single file.
///
/// File-scoped: no memory across files. Extractors never mutate the file or
/// repository snapshot; they only produce signals.
pub trait FileExtractor: Send + Sync {
    /// Stable extractor id, used for disable lists and logs.
    fn id(&self) -> &'static str;

    /// The pattern this extractor produces evidence for.
    fn pattern(&self) -> PatternId;

    /// Cheap path-level filter run before any content is read.
    fn matches(&self, file: &SourceFile) -> bool;

    /// Whether `extract` wants the file content.
    fn needs_content(&self) -> bool {
        false
    }

    fn extract(&self, ctx: &FileContext<'_>) -> Result<Vec<PatternSignal>, ExtractError>;
}

/// A detector that needs a view over the whole repository.
///
/// Runs in a second pass, after all file-scoped extraction for that same
/// repository has completed — a per-repository barrier, never a global one.
pub trait RepositoryExtractor: Send + Sync {
    fn id(&self) -> &'static str;

    fn pattern(&self) -> PatternId;

    fn extract(&self, view: &RepositoryView<'_>) -> Result<Vec<PatternSignal>, ExtractError>;
}
