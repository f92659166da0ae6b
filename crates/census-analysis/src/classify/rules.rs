//! Ordered classification rules — first matching rule wins per pattern,
//! preventing duplicate or contradictory findings for the same evidence.

use census_core::registry::{PatternDefinition, PatternRegistry, PatternTag};
use census_core::types::adoption::{AdoptionRecord, PatternAdoption};
use census_core::types::findings::{Finding, FindingCategory};

/// Applies the ordered rules to adoption statistics.
///
/// Patterns are visited priority-descending, then id-ascending, so findings
/// come out in a stable, reproducible order.
pub struct Classifier<'a> {
    registry: &'a PatternRegistry,
    dominance_threshold: f64,
}

impl<'a> Classifier<'a> {
    pub fn new(registry: &'a PatternRegistry, dominance_threshold: f64) -> Self {
        Self {
            registry,
            dominance_threshold,
        }
    }

    pub fn classify(&self, adoption: &[PatternAdoption]) -> Vec<Finding> {
        let mut ordered: Vec<(&PatternDefinition, &PatternAdoption)> = adoption
            .iter()
            .filter_map(|a| self.registry.get(&a.pattern).map(|def| (def, a)))
            .collect();
        ordered.sort_by(|(da, _), (db, _)| {
            db.priority
                .cmp(&da.priority)
                .then_with(|| da.id.cmp(&db.id))
        });

        let mut findings = Vec::new();
        for (def, pattern_adoption) in ordered {
            if pattern_adoption.applicable.is_empty() {
                tracing::debug!(
                    pattern = %def.id,
                    "no applicable repositories; pattern not classified"
                );
                continue;
            }
            findings.extend(self.classify_pattern(def, pattern_adoption));
        }
        findings
    }

    fn classify_pattern(
        &self,
        def: &PatternDefinition,
        adoption: &PatternAdoption,
    ) -> Vec<Finding> {
        if let Some(finding) = self.rule_dominant(def, adoption) {
            return vec![finding];
        }
        if let Some(finding) = self.rule_critical_gap(def, adoption) {
            return vec![finding];
        }
        let migrations = self.rule_migration_candidates(def, adoption);
        if !migrations.is_empty() {
            return migrations;
        }
        vec![self.rule_mixed(def, adoption)]
    }

    /// Rule 1: a recommended pattern with a variant at or above the
    /// dominance threshold names that variant.
    fn rule_dominant(
        &self,
        def: &PatternDefinition,
        adoption: &PatternAdoption,
    ) -> Option<Finding> {
        if !def.has_tag(PatternTag::Recommended) {
            return None;
        }

        let mut best: Option<&AdoptionRecord> = None;
        for record in &adoption.records {
            if record.adoption_fraction() < self.dominance_threshold {
                continue;
            }
            let better = match best {
                None => true,
                // ties break on the lexicographically smaller variant name
                Some(current) => {
                    record.adoption_fraction() > current.adoption_fraction()
                        || (record.adoption_fraction() == current.adoption_fraction()
                            && record.variant < current.variant)
                }
            };
            if better {
                best = Some(record);
            }
        }
        let record = best?;

        let variant_label = record
            .variant
            .as_ref()
            .map(|v| v.as_str())
            .unwrap_or("the convention");
        Some(Finding {
            pattern: def.id.clone(),
            category: FindingCategory::DominantPattern,
            variant: record.variant.clone(),
            affected_repositories: record.repositories.iter().cloned().collect(),
            supporting_records: vec![record.clone()],
            recommendation: format!(
                "Standardize on {variant_label} for {}: {} of {} applicable repositories already follow it ({}%).",
                def.id,
                record.repositories.len(),
                record.denominator,
                record.percentage,
            ),
        })
    }

    /// Rule 2: a critical-gap pattern with zero adoption anywhere yields
    /// exactly one finding for the whole pattern, not one per repository.
    fn rule_critical_gap(
        &self,
        def: &PatternDefinition,
        adoption: &PatternAdoption,
    ) -> Option<Finding> {
        if !def.has_tag(PatternTag::CriticalGap) || adoption.has_any_adopter() {
            return None;
        }
        Some(Finding {
            pattern: def.id.clone(),
            category: FindingCategory::CriticalGap,
            variant: None,
            affected_repositories: adoption.applicable.iter().cloned().collect(),
            supporting_records: adoption.records.clone(),
            recommendation: format!(
                "None of the {} applicable repositories adopts {} in any form; introduce it corpus-wide.",
                adoption.applicable.len(),
                def.id,
            ),
        })
    }

    /// Rule 3: a mandatory pattern produces one migration-candidate finding
    /// per applicable repository exhibiting zero variants while at least
    /// one peer exhibits some.
    fn rule_migration_candidates(
        &self,
        def: &PatternDefinition,
        adoption: &PatternAdoption,
    ) -> Vec<Finding> {
        if !def.has_tag(PatternTag::Mandatory) || !adoption.has_any_adopter() {
            return Vec::new();
        }
        let adopter_count = adoption.adopters().len();
        let supporting: Vec<AdoptionRecord> = adoption
            .records
            .iter()
            .filter(|r| !r.repositories.is_empty())
            .cloned()
            .collect();

        adoption
            .lagging()
            .into_iter()
            .map(|repo| Finding {
                pattern: def.id.clone(),
                category: FindingCategory::MigrationCandidate,
                variant: None,
                recommendation: format!(
                    "{repo} exhibits no {} convention while {adopter_count} of its peers do; schedule a migration.",
                    def.id,
                ),
                affected_repositories: vec![repo],
                supporting_records: supporting.clone(),
            })
            .collect()
    }

    /// Rule 4: everything else is mixed adoption.
    fn rule_mixed(&self, def: &PatternDefinition, adoption: &PatternAdoption) -> Finding {
        Finding {
            pattern: def.id.clone(),
            category: FindingCategory::MixedAdoption,
            variant: None,
            affected_repositories: adoption.adopters().into_iter().collect(),
            supporting_records: adoption.records.clone(),
            recommendation: format!(
                "Adoption of {} is mixed across {} applicable repositories; no variant clears the dominance threshold.",
                def.id,
                adoption.applicable.len(),
            ),
        }
    }
}
