//! Applicability predicates — decide whether a repository is counted in a
//! pattern's adoption statistic at all.
//!
//! "Not applicable" and "applicable but absent" are different facts;
//! repositories failing the predicate enter neither numerator nor
//! denominator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::PatternId;
use crate::types::source::SourceFile;

/// Lookup over the evidence already collected for one repository.
pub trait PatternPresence {
    /// Whether the repository exhibits at least one signal for the pattern.
    fn exhibits(&self, pattern: &PatternId) -> bool;
}

/// Everything a predicate may inspect for one repository.
pub struct ApplicabilityContext<'a> {
    pub metadata: &'a BTreeMap<String, String>,
    pub files: &'a [SourceFile],
    pub presence: &'a dyn PatternPresence,
}

/// A rule deciding whether a repository is counted for a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ApplicabilityRule {
    /// Trivially true: the denominator is the whole corpus.
    Always,
    /// The repository contains at least one file matching the glob.
    HasFileMatching { glob: String },
    MetadataEquals { key: String, value: String },
    /// The metadata value parses as an integer and is at least `min`.
    MetadataAtLeast { key: String, min: u64 },
    /// The repository has at least one signal for another declared pattern.
    ExhibitsPattern { pattern: PatternId },
    AllOf { rules: Vec<ApplicabilityRule> },
    AnyOf { rules: Vec<ApplicabilityRule> },
    Not { rule: Box<ApplicabilityRule> },
}

impl Default for ApplicabilityRule {
    fn default() -> Self {
        Self::Always
    }
}

impl ApplicabilityRule {
    pub fn evaluate(&self, ctx: &ApplicabilityContext<'_>) -> bool {
        match self {
            Self::Always => true,
            Self::HasFileMatching { glob } => match glob::Pattern::new(glob) {
                Ok(pattern) => ctx.files.iter().any(|f| pattern.matches(&f.path)),
                // invalid globs are rejected during registry validation
                Err(_) => false,
            },
            Self::MetadataEquals { key, value } => {
                ctx.metadata.get(key).map(|v| v == value).unwrap_or(false)
            }
            Self::MetadataAtLeast { key, min } => ctx
                .metadata
                .get(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(|v| v >= *min)
                .unwrap_or(false),
            Self::ExhibitsPattern { pattern } => ctx.presence.exhibits(pattern),
            Self::AllOf { rules } => rules.iter().all(|r| r.evaluate(ctx)),
            Self::AnyOf { rules } => rules.iter().any(|r| r.evaluate(ctx)),
            Self::Not { rule } => !rule.evaluate(ctx),
        }
    }

    /// All `ExhibitsPattern` references inside this rule tree.
    pub fn referenced_patterns(&self) -> Vec<&PatternId> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a PatternId>) {
        match self {
            Self::ExhibitsPattern { pattern } => out.push(pattern),
            Self::AllOf { rules } | Self::AnyOf { rules } => {
                for rule in rules {
                    rule.collect_references(out);
                }
            }
            Self::Not { rule } => rule.collect_references(out),
            _ => {}
        }
    }

    /// All globs inside this rule tree, for validation.
    pub fn globs(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_globs(&mut out);
        out
    }

    fn collect_globs<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::HasFileMatching { glob } => out.push(glob),
            Self::AllOf { rules } | Self::AnyOf { rules } => {
                for rule in rules {
                    rule.collect_globs(out);
                }
            }
            Self::Not { rule } => rule.collect_globs(out),
            _ => {}
        }
    }

    /// Whether the rule counts every repository.
    pub fn is_trivial(&self) -> bool {
        matches!(self, Self::Always)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    struct NoPresence;

    impl PatternPresence for NoPresence {
        fn exhibits(&self, _pattern: &PatternId) -> bool {
            false
        }
    }

    fn file(path: &str) -> SourceFile {
        SourceFile {
            path: path.to_string(),
            extension: String::new(),
            size: 0,
            roles: smallvec![],
        }
    }

    fn ctx<'a>(
        metadata: &'a BTreeMap<String, String>,
        files: &'a [SourceFile],
    ) -> ApplicabilityContext<'a> {
        ApplicabilityContext {
            metadata,
            files,
            presence: &NoPresence,
        }
    }

    #[test]
    fn metadata_at_least_excludes_below_threshold() {
        let rule = ApplicabilityRule::MetadataAtLeast {
            key: "locales".to_string(),
            min: 2,
        };
        let files = vec![];

        let mut one = BTreeMap::new();
        one.insert("locales".to_string(), "1".to_string());
        assert!(!rule.evaluate(&ctx(&one, &files)));

        let mut three = BTreeMap::new();
        three.insert("locales".to_string(), "3".to_string());
        assert!(rule.evaluate(&ctx(&three, &files)));
    }

    #[test]
    fn has_file_matching_checks_inventory() {
        let rule = ApplicabilityRule::HasFileMatching {
            glob: "**/tsconfig*.json".to_string(),
        };
        let metadata = BTreeMap::new();
        let with = vec![file("packages/web/tsconfig.json")];
        let without = vec![file("src/index.js")];
        assert!(rule.evaluate(&ctx(&metadata, &with)));
        assert!(!rule.evaluate(&ctx(&metadata, &without)));
    }

    #[test]
    fn composite_rules_nest() {
        let rule = ApplicabilityRule::AllOf {
            rules: vec![
                ApplicabilityRule::Always,
                ApplicabilityRule::Not {
                    rule: Box::new(ApplicabilityRule::MetadataEquals {
                        key: "archived".to_string(),
                        value: "true".to_string(),
                    }),
                },
            ],
        };
        let metadata = BTreeMap::new();
        let files = vec![];
        assert!(rule.evaluate(&ctx(&metadata, &files)));
    }

    #[test]
    fn referenced_patterns_collected_recursively() {
        let rule = ApplicabilityRule::AnyOf {
            rules: vec![
                ApplicabilityRule::ExhibitsPattern {
                    pattern: PatternId::from("routing-style"),
                },
                ApplicabilityRule::Not {
                    rule: Box::new(ApplicabilityRule::ExhibitsPattern {
                        pattern: PatternId::from("lint-config"),
                    }),
                },
            ],
        };
        let refs = rule.referenced_patterns();
        assert_eq!(refs.len(), 2);
    }

    #[test]
    fn rule_round_trips_through_toml() {
        let rule = ApplicabilityRule::MetadataAtLeast {
            key: "locales".to_string(),
            min: 2,
        };
        let text = toml::to_string(&rule).unwrap();
        let back: ApplicabilityRule = toml::from_str(&text).unwrap();
        assert_eq!(back, rule);
    }
}
