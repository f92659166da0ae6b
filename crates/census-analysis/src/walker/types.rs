//! Walker output types.

use census_core::types::source::SourceFile;
use census_core::types::warning::RunWarning;

/// Result of walking one repository tree.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Discovered files, sorted by path — a finite, restartable sequence.
    pub files: Vec<SourceFile>,
    /// Recovered per-subtree problems.
    pub warnings: Vec<RunWarning>,
    /// Whether the walk was cut short by the run deadline.
    pub interrupted: bool,
}
