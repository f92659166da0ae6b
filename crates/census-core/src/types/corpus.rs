//! Corpus input: the set of repositories analyzed in one run.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::collections::FxHashSet;
use crate::types::identifiers::RepoId;

/// Declared input for one repository: identifier, root location, and
/// free-form metadata (label, framework version, locale count, …).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSpec {
    pub id: RepoId,
    pub root: PathBuf,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl RepoSpec {
    pub fn new(id: impl Into<RepoId>, root: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            root: root.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Metadata value parsed as an unsigned integer, if present and numeric.
    pub fn metadata_u64(&self, key: &str) -> Option<u64> {
        self.metadata.get(key)?.trim().parse().ok()
    }
}

/// The full set of repositories analyzed together. Immutable for the run's
/// duration; no state survives across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusSpec {
    pub repositories: Vec<RepoSpec>,
}

impl CorpusSpec {
    pub fn new(repositories: Vec<RepoSpec>) -> Self {
        Self { repositories }
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Reject empty corpora and duplicate or empty repository ids.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repositories.is_empty() {
            return Err(ConfigError::EmptyCorpus);
        }
        let mut seen = FxHashSet::default();
        for repo in &self.repositories {
            if repo.id.is_empty() {
                return Err(ConfigError::EmptyRepositoryId);
            }
            if !seen.insert(repo.id.clone()) {
                return Err(ConfigError::DuplicateRepository {
                    id: repo.id.clone(),
                });
            }
        }
        Ok(())
    }
}
