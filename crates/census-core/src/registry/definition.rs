//! Static pattern descriptors.

use serde::{Deserialize, Serialize};

use crate::types::identifiers::{PatternId, VariantName};

use super::applicability::ApplicabilityRule;

/// Domain grouping of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternCategory {
    Routing,
    Components,
    Linting,
    Dependencies,
    TypeChecking,
    Internationalization,
    Styling,
    Testing,
    #[default]
    Structure,
}

impl PatternCategory {
    pub fn all() -> &'static [PatternCategory] {
        &[
            Self::Routing,
            Self::Components,
            Self::Linting,
            Self::Dependencies,
            Self::TypeChecking,
            Self::Internationalization,
            Self::Styling,
            Self::Testing,
            Self::Structure,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Routing => "routing",
            Self::Components => "components",
            Self::Linting => "linting",
            Self::Dependencies => "dependencies",
            Self::TypeChecking => "type-checking",
            Self::Internationalization => "internationalization",
            Self::Styling => "styling",
            Self::Testing => "testing",
            Self::Structure => "structure",
        }
    }
}

impl std::fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifier-relevant tags on a pattern definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternTag {
    /// Eligible for `dominant-pattern` findings.
    Recommended,
    /// Zero adoption across all applicable repositories is a corpus-wide gap.
    CriticalGap,
    /// Every applicable repository is expected to adopt some variant;
    /// laggards become migration candidates.
    Mandatory,
}

/// Static descriptor of a detectable convention.
///
/// Loaded once per run from an external registry; the core consumes it
/// read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternDefinition {
    pub id: PatternId,
    pub category: PatternCategory,
    #[serde(default)]
    pub description: String,
    /// Mutually-exclusive variant names; empty for presence-based patterns.
    #[serde(default)]
    pub variants: Vec<VariantName>,
    #[serde(default)]
    pub applicability: ApplicabilityRule,
    /// Classifier visit order: higher priority first.
    #[serde(default)]
    pub priority: u8,
    #[serde(default)]
    pub tags: Vec<PatternTag>,
    /// Directed references to related patterns; resolution belongs to the
    /// report synthesizer.
    #[serde(default)]
    pub related: Vec<PatternId>,
}

impl PatternDefinition {
    pub fn new(id: impl Into<PatternId>, category: PatternCategory) -> Self {
        Self {
            id: id.into(),
            category,
            description: String::new(),
            variants: Vec::new(),
            applicability: ApplicabilityRule::Always,
            priority: 0,
            tags: Vec::new(),
            related: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_variants<I, V>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<VariantName>,
    {
        self.variants = variants.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_applicability(mut self, applicability: ApplicabilityRule) -> Self {
        self.applicability = applicability;
        self
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tag(mut self, tag: PatternTag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn with_related<I, P>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PatternId>,
    {
        self.related = related.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_tag(&self, tag: PatternTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_variant_based(&self) -> bool {
        !self.variants.is_empty()
    }

    pub fn declares_variant(&self, variant: &VariantName) -> bool {
        self.variants.contains(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_variants_and_tags() {
        let def = PatternDefinition::new("routing-style", PatternCategory::Routing)
            .with_variants(["app-router", "pages-router"])
            .with_tag(PatternTag::Recommended)
            .with_priority(9);
        assert!(def.is_variant_based());
        assert!(def.declares_variant(&VariantName::from("app-router")));
        assert!(!def.declares_variant(&VariantName::from("file-router")));
        assert!(def.has_tag(PatternTag::Recommended));
        assert!(!def.has_tag(PatternTag::Mandatory));
    }

    #[test]
    fn definition_parses_from_toml() {
        let def: PatternDefinition = toml::from_str(
            r#"
            id = "i18n-layout"
            category = "internationalization"
            variants = ["directory-per-locale", "single-catalog"]
            priority = 4
            tags = ["recommended"]

            [applicability]
            kind = "metadata-at-least"
            key = "locales"
            min = 2
            "#,
        )
        .unwrap();
        assert_eq!(def.id, PatternId::from("i18n-layout"));
        assert_eq!(def.variants.len(), 2);
        assert!(matches!(
            def.applicability,
            ApplicabilityRule::MetadataAtLeast { .. }
        ));
    }
}
