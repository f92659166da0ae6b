//! Adoption aggregation — repository presence per pattern variant.
//!
//! Runs exactly once per run, after the corpus-wide extraction barrier:
//! every denominator depends on knowing the complete applicable set.

use std::collections::{BTreeMap, BTreeSet};

use census_core::registry::{
    ApplicabilityContext, PatternDefinition, PatternPresence, PatternRegistry,
};
use census_core::types::adoption::{percentage, AdoptionRecord, PatternAdoption};
use census_core::types::identifiers::{PatternId, RepoId};
use census_core::types::source::SourceFile;

use crate::evidence::EvidenceStore;

/// One conclusive repository's profile at aggregation time.
///
/// Inconclusive and skipped repositories never reach the aggregator, so
/// they enter neither numerator nor denominator.
#[derive(Debug, Clone)]
pub struct RepositoryProfile {
    pub id: RepoId,
    pub metadata: BTreeMap<String, String>,
    pub files: Vec<SourceFile>,
}

struct StorePresence<'a> {
    store: &'a EvidenceStore,
    repository: &'a RepoId,
}

impl PatternPresence for StorePresence<'_> {
    fn exhibits(&self, pattern: &PatternId) -> bool {
        self.store.repository_exhibits(self.repository, pattern)
    }
}

/// Computes adoption records for every pattern over the conclusive
/// repositories. Recomputed fully each run; never mutated incrementally.
pub struct Aggregator<'a> {
    registry: &'a PatternRegistry,
}

impl<'a> Aggregator<'a> {
    pub fn new(registry: &'a PatternRegistry) -> Self {
        Self { registry }
    }

    pub fn aggregate(
        &self,
        profiles: &[RepositoryProfile],
        evidence: &EvidenceStore,
    ) -> Vec<PatternAdoption> {
        self.registry
            .iter()
            .map(|def| self.aggregate_pattern(def, profiles, evidence))
            .collect()
    }

    fn aggregate_pattern(
        &self,
        def: &PatternDefinition,
        profiles: &[RepositoryProfile],
        evidence: &EvidenceStore,
    ) -> PatternAdoption {
        // Applicability first: "not applicable" and "applicable but absent"
        // are different facts and must not be conflated.
        let applicable: BTreeSet<RepoId> = profiles
            .iter()
            .filter(|profile| {
                let presence = StorePresence {
                    store: evidence,
                    repository: &profile.id,
                };
                def.applicability.evaluate(&ApplicabilityContext {
                    metadata: &profile.metadata,
                    files: &profile.files,
                    presence: &presence,
                })
            })
            .map(|profile| profile.id.clone())
            .collect();
        let denominator = applicable.len();

        let records = if def.is_variant_based() {
            def.variants
                .iter()
                .map(|variant| {
                    let mut adopters = BTreeSet::new();
                    let mut signal_count = 0usize;
                    for signal in evidence.for_pattern(&def.id) {
                        if signal.variant.as_ref() == Some(variant)
                            && applicable.contains(&signal.repository)
                        {
                            adopters.insert(signal.repository.clone());
                            signal_count += 1;
                        }
                    }
                    AdoptionRecord {
                        pattern: def.id.clone(),
                        variant: Some(variant.clone()),
                        percentage: percentage(adopters.len(), denominator),
                        repositories: adopters,
                        denominator,
                        signal_count,
                    }
                })
                .collect()
        } else {
            let mut adopters = BTreeSet::new();
            let mut signal_count = 0usize;
            for signal in evidence.for_pattern(&def.id) {
                if applicable.contains(&signal.repository) {
                    adopters.insert(signal.repository.clone());
                    signal_count += 1;
                }
            }
            vec![AdoptionRecord {
                pattern: def.id.clone(),
                variant: None,
                percentage: percentage(adopters.len(), denominator),
                repositories: adopters,
                denominator,
                signal_count,
            }]
        };

        PatternAdoption {
            pattern: def.id.clone(),
            applicable,
            records,
        }
    }
}
