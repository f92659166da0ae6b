//! Pattern definition registry — consumed read-only by the engine.

pub mod applicability;
pub mod definition;
pub mod graph;
mod validate;

pub use applicability::{ApplicabilityContext, ApplicabilityRule, PatternPresence};
pub use definition::{PatternCategory, PatternDefinition, PatternTag};
pub use graph::ReferenceGraph;

use serde::Deserialize;

use crate::errors::{AggregationError, ConfigError};
use crate::types::collections::FxHashMap;
use crate::types::identifiers::PatternId;

/// All pattern definitions for one run.
///
/// Loaded and validated before any scanning begins; read-only afterwards.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: Vec<PatternDefinition>,
    index: FxHashMap<PatternId, usize>,
}

#[derive(Deserialize)]
struct RegistryFile {
    #[serde(default)]
    patterns: Vec<PatternDefinition>,
}

impl PatternRegistry {
    /// Build a registry, rejecting structural problems.
    pub fn from_definitions(patterns: Vec<PatternDefinition>) -> Result<Self, ConfigError> {
        validate::check_structure(&patterns)?;
        let index = patterns
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Ok(Self { patterns, index })
    }

    /// Parse a TOML registry document (`[[patterns]]` tables).
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: RegistryFile =
            toml::from_str(text).map_err(|e| ConfigError::RegistryParse {
                message: e.to_string(),
            })?;
        Self::from_definitions(file.patterns)
    }

    /// Pre-run validation pass over applicability predicates.
    pub fn validate_predicates(&self) -> Result<(), AggregationError> {
        validate::check_predicates(&self.patterns, &self.index)
    }

    pub fn get(&self, id: &PatternId) -> Option<&PatternDefinition> {
        self.index.get(id).map(|&i| &self.patterns[i])
    }

    pub fn contains(&self, id: &PatternId) -> bool {
        self.index.contains_key(id)
    }

    /// Definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &PatternDefinition> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn reference_graph(&self) -> ReferenceGraph {
        ReferenceGraph::build(self)
    }
}
