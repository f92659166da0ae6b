//! Registry validation — structural checks plus the pre-run predicate pass.

use crate::errors::{AggregationError, ConfigError};
use crate::types::collections::{FxHashMap, FxHashSet};
use crate::types::identifiers::PatternId;

use super::definition::PatternDefinition;

/// Structural problems are `ConfigError` and reject the registry outright.
pub(super) fn check_structure(patterns: &[PatternDefinition]) -> Result<(), ConfigError> {
    let mut seen = FxHashSet::default();
    for def in patterns {
        if def.id.is_empty() {
            return Err(ConfigError::EmptyPatternId);
        }
        if !seen.insert(def.id.clone()) {
            return Err(ConfigError::DuplicatePattern { id: def.id.clone() });
        }
        let mut variants = FxHashSet::default();
        for variant in &def.variants {
            if variant.is_empty() {
                return Err(ConfigError::EmptyVariantName {
                    pattern: def.id.clone(),
                });
            }
            if !variants.insert(variant.clone()) {
                return Err(ConfigError::DuplicateVariant {
                    pattern: def.id.clone(),
                    variant: variant.clone(),
                });
            }
        }
        for pattern_glob in def.applicability.globs() {
            if let Err(e) = glob::Pattern::new(pattern_glob) {
                return Err(ConfigError::InvalidGlob {
                    pattern: def.id.clone(),
                    glob: pattern_glob.to_string(),
                    message: e.to_string(),
                });
            }
        }
    }

    let ids: FxHashSet<&PatternId> = patterns.iter().map(|p| &p.id).collect();
    for def in patterns {
        for related in &def.related {
            if !ids.contains(related) {
                return Err(ConfigError::UnknownRelated {
                    pattern: def.id.clone(),
                    related: related.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Applicability predicates referencing undeclared patterns are fatal
/// `AggregationError`s, caught before any scanning begins.
pub(super) fn check_predicates(
    patterns: &[PatternDefinition],
    index: &FxHashMap<PatternId, usize>,
) -> Result<(), AggregationError> {
    for def in patterns {
        for referenced in def.applicability.referenced_patterns() {
            if !index.contains_key(referenced) {
                return Err(AggregationError::UndeclaredPredicateReference {
                    pattern: def.id.clone(),
                    referenced: referenced.clone(),
                });
            }
        }
    }
    Ok(())
}
