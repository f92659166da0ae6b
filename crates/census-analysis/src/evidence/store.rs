//! Append-only per-run evidence store.

use census_core::types::collections::FxHashMap;
use census_core::types::identifiers::{PatternId, RepoId};
use census_core::types::signal::PatternSignal;

/// All signals produced during one run, indexed by pattern and repository.
///
/// Append-only; no deduplication occurs at insertion. A repository with five
/// instances of a convention still contributes one "present" fact to
/// adoption — raw counts are supplementary detail only. Discarded at run
/// end; nothing crosses runs.
#[derive(Debug, Default)]
pub struct EvidenceStore {
    signals: Vec<PatternSignal>,
    by_pattern: FxHashMap<PatternId, Vec<usize>>,
    by_repository: FxHashMap<RepoId, Vec<usize>>,
}

impl EvidenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, signal: PatternSignal) {
        let idx = self.signals.len();
        self.by_pattern
            .entry(signal.pattern.clone())
            .or_default()
            .push(idx);
        self.by_repository
            .entry(signal.repository.clone())
            .or_default()
            .push(idx);
        self.signals.push(signal);
    }

    pub fn append_batch(&mut self, signals: impl IntoIterator<Item = PatternSignal>) {
        for signal in signals {
            self.append(signal);
        }
    }

    pub fn signals(&self) -> &[PatternSignal] {
        &self.signals
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn for_pattern(&self, pattern: &PatternId) -> impl Iterator<Item = &PatternSignal> {
        self.by_pattern
            .get(pattern)
            .into_iter()
            .flatten()
            .map(|&i| &self.signals[i])
    }

    pub fn for_repository(&self, repository: &RepoId) -> impl Iterator<Item = &PatternSignal> {
        self.by_repository
            .get(repository)
            .into_iter()
            .flatten()
            .map(|&i| &self.signals[i])
    }

    /// Whether a repository has at least one signal for a pattern.
    pub fn repository_exhibits(&self, repository: &RepoId, pattern: &PatternId) -> bool {
        self.by_repository
            .get(repository)
            .map(|idxs| idxs.iter().any(|&i| self.signals[i].pattern == *pattern))
            .unwrap_or(false)
    }
}
