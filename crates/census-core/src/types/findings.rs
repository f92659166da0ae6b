//! Findings — the only artifact that crosses the core/external boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::adoption::AdoptionRecord;
use crate::types::identifiers::{PatternId, RepoId, VariantName};
use crate::types::warning::RunWarning;

/// Classification assigned to a finding by the ordered rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingCategory {
    DominantPattern,
    CriticalGap,
    MigrationCandidate,
    MixedAdoption,
}

impl FindingCategory {
    pub fn all() -> &'static [FindingCategory] {
        &[
            Self::DominantPattern,
            Self::CriticalGap,
            Self::MigrationCandidate,
            Self::MixedAdoption,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::DominantPattern => "dominant-pattern",
            Self::CriticalGap => "critical-gap",
            Self::MigrationCandidate => "migration-candidate",
            Self::MixedAdoption => "mixed-adoption",
        }
    }
}

impl std::fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, evidence-backed judgment derived from adoption statistics.
///
/// Every finding cites at least one adoption record; `affected_repositories`
/// lists only the repositories relevant to its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub pattern: PatternId,
    pub category: FindingCategory,
    /// The dominant variant, for `dominant-pattern` findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<VariantName>,
    pub affected_repositories: Vec<RepoId>,
    pub supporting_records: Vec<AdoptionRecord>,
    pub recommendation: String,
}

/// Per-run roll-up counts for the findings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub repositories_scanned: usize,
    pub repositories_skipped: usize,
    pub repositories_inconclusive: usize,
    pub files_scanned: usize,
    pub signals_collected: usize,
    pub patterns_evaluated: usize,
    pub findings_by_category: BTreeMap<String, usize>,
    /// xxh3 fingerprint of the serialized findings; identical runs over an
    /// unchanged corpus and registry produce identical fingerprints.
    pub fingerprint: String,
}

/// The complete output of one run — the sole contract with the report
/// synthesizer. Either a run completes and emits one full document, or it
/// aborts and emits none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindingsDocument {
    pub findings: Vec<Finding>,
    pub warnings: Vec<RunWarning>,
    pub summary: RunSummary,
}

impl FindingsDocument {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Stable fingerprint over the serialized findings.
    pub fn fingerprint_of(findings: &[Finding]) -> String {
        let bytes = serde_json::to_vec(findings).unwrap_or_default();
        format!("{:016x}", xxhash_rust::xxh3::xxh3_64(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_are_kebab_case() {
        assert_eq!(FindingCategory::DominantPattern.name(), "dominant-pattern");
        let json = serde_json::to_string(&FindingCategory::CriticalGap).unwrap();
        assert_eq!(json, "\"critical-gap\"");
    }

    #[test]
    fn fingerprint_is_stable_for_equal_findings() {
        let finding = Finding {
            pattern: PatternId::from("routing-style"),
            category: FindingCategory::MixedAdoption,
            variant: None,
            affected_repositories: vec![RepoId::from("a")],
            supporting_records: vec![],
            recommendation: "mixed".to_string(),
        };
        let a = FindingsDocument::fingerprint_of(std::slice::from_ref(&finding));
        let b = FindingsDocument::fingerprint_of(&[finding]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
    }
}
