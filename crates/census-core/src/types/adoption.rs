//! Derived adoption statistics — the aggregator's output.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::{PatternId, RepoId, VariantName};

/// Adoption of one variant of one pattern across the applicable
/// repositories.
///
/// Recomputed fully each run; never mutated incrementally. The adoption
/// unit is repository presence — `signal_count` carries the raw instance
/// count as supplementary detail only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdoptionRecord {
    pub pattern: PatternId,
    /// `None` for presence-based patterns.
    pub variant: Option<VariantName>,
    /// Applicable repositories with at least one signal for this variant.
    pub repositories: BTreeSet<RepoId>,
    /// Number of repositories for which the pattern is applicable — never
    /// the corpus size unless the predicate is trivially true.
    pub denominator: usize,
    /// `100 · |repositories| / denominator`, rounded to two decimals; 0
    /// when the denominator is 0.
    pub percentage: f64,
    /// Raw signal count across the adopting repositories.
    pub signal_count: usize,
}

impl AdoptionRecord {
    /// Unrounded adoption fraction in `[0, 1]`.
    pub fn adoption_fraction(&self) -> f64 {
        if self.denominator == 0 {
            return 0.0;
        }
        self.repositories.len() as f64 / self.denominator as f64
    }
}

/// All adoption records of a single pattern, plus its applicable set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAdoption {
    pub pattern: PatternId,
    /// Repositories for which the applicability predicate holds.
    pub applicable: BTreeSet<RepoId>,
    /// One record per declared variant, or a single variant-less record for
    /// presence-based patterns. Zero-adopter records are retained.
    pub records: Vec<AdoptionRecord>,
}

impl PatternAdoption {
    pub fn record_for(&self, variant: Option<&VariantName>) -> Option<&AdoptionRecord> {
        self.records.iter().find(|r| r.variant.as_ref() == variant)
    }

    /// Union of adopters across all variants. A repository may appear in
    /// several variants' sets (hybrid adoption); the union collapses that.
    pub fn adopters(&self) -> BTreeSet<RepoId> {
        self.records
            .iter()
            .flat_map(|r| r.repositories.iter().cloned())
            .collect()
    }

    /// Applicable repositories with no signal for any variant.
    pub fn lagging(&self) -> BTreeSet<RepoId> {
        let adopters = self.adopters();
        self.applicable
            .iter()
            .filter(|r| !adopters.contains(*r))
            .cloned()
            .collect()
    }

    pub fn has_any_adopter(&self) -> bool {
        self.records.iter().any(|r| !r.repositories.is_empty())
    }
}

/// Percentage with two-decimal rounding, shared by the aggregator.
pub fn percentage(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    let pct = numerator as f64 * 100.0 / denominator as f64;
    (pct * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_two_decimals() {
        assert_eq!(percentage(2, 3), 66.67);
        assert_eq!(percentage(1, 1), 100.0);
        assert_eq!(percentage(0, 3), 0.0);
        assert_eq!(percentage(5, 0), 0.0);
    }

    #[test]
    fn lagging_is_applicable_minus_adopters() {
        let record = AdoptionRecord {
            pattern: PatternId::from("routing-style"),
            variant: Some(VariantName::from("app-router")),
            repositories: [RepoId::from("a")].into_iter().collect(),
            denominator: 2,
            percentage: 50.0,
            signal_count: 3,
        };
        let adoption = PatternAdoption {
            pattern: PatternId::from("routing-style"),
            applicable: [RepoId::from("a"), RepoId::from("b")].into_iter().collect(),
            records: vec![record],
        };
        let lagging = adoption.lagging();
        assert_eq!(lagging.len(), 1);
        assert!(lagging.contains(&RepoId::from("b")));
    }
}
