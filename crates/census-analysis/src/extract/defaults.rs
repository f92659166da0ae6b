//! Built-in extractor set and the pattern definitions it feeds.
//!
//! The definitions mirror what an external registry would declare for these
//! extractors; production runs may swap in their own registry, as long as
//! every extractor's pattern is declared.

use census_core::registry::{
    ApplicabilityRule, PatternCategory, PatternDefinition, PatternTag,
};

use super::file_scoped::{
    dynamic_segment, lint_config, package_manager, router_style, runtime_pin,
    tsconfig_strictness, DynamicSegmentExtractor, LintConfigExtractor, PackageManagerExtractor,
    RouterStyleExtractor, RuntimePinExtractor, TsconfigStrictnessExtractor,
};
use super::registry::ExtractorSet;
use super::repo_scoped::{collocation, locale_layout, CollocationExtractor, LocaleLayoutExtractor};

/// All built-in extractors.
pub fn default_extractors() -> ExtractorSet {
    let mut set = ExtractorSet::new();

    set.register_file(Box::new(RouterStyleExtractor));
    set.register_file(Box::new(DynamicSegmentExtractor));
    set.register_file(Box::new(LintConfigExtractor::new()));
    set.register_file(Box::new(PackageManagerExtractor));
    set.register_file(Box::new(RuntimePinExtractor));
    set.register_file(Box::new(TsconfigStrictnessExtractor));

    set.register_repository(Box::new(CollocationExtractor));
    set.register_repository(Box::new(LocaleLayoutExtractor));

    set
}

/// Pattern definitions matching the built-in extractors.
pub fn default_pattern_definitions() -> Vec<PatternDefinition> {
    vec![
        PatternDefinition::new(router_style::PATTERN, PatternCategory::Routing)
            .with_description("App-directory vs pages-directory routing")
            .with_variants([router_style::VARIANT_APP, router_style::VARIANT_PAGES])
            .with_priority(9)
            .with_tag(PatternTag::Recommended)
            .with_related([dynamic_segment::PATTERN]),
        PatternDefinition::new(dynamic_segment::PATTERN, PatternCategory::Routing)
            .with_description("Bracketed dynamic route segment folders")
            .with_priority(5)
            .with_applicability(ApplicabilityRule::ExhibitsPattern {
                pattern: router_style::PATTERN.into(),
            })
            .with_related([router_style::PATTERN]),
        PatternDefinition::new(tsconfig_strictness::PATTERN, PatternCategory::TypeChecking)
            .with_description("TypeScript strict mode adoption")
            .with_variants([
                tsconfig_strictness::VARIANT_STRICT,
                tsconfig_strictness::VARIANT_LOOSE,
            ])
            .with_priority(8)
            .with_tag(PatternTag::Recommended)
            .with_applicability(ApplicabilityRule::HasFileMatching {
                glob: "**/tsconfig*.json".to_string(),
            }),
        PatternDefinition::new(lint_config::PATTERN, PatternCategory::Linting)
            .with_description("ESLint flat config vs legacy rc files")
            .with_variants([lint_config::VARIANT_FLAT, lint_config::VARIANT_LEGACY])
            .with_priority(7)
            .with_tag(PatternTag::Recommended)
            .with_tag(PatternTag::CriticalGap),
        PatternDefinition::new(package_manager::PATTERN, PatternCategory::Dependencies)
            .with_description("Package manager from the root lockfile")
            .with_variants([
                package_manager::VARIANT_NPM,
                package_manager::VARIANT_YARN,
                package_manager::VARIANT_PNPM,
                package_manager::VARIANT_BUN,
            ])
            .with_priority(6)
            .with_tag(PatternTag::Mandatory),
        PatternDefinition::new(runtime_pin::PATTERN, PatternCategory::Dependencies)
            .with_description("Node runtime version pinning")
            .with_variants([
                runtime_pin::VARIANT_NVMRC,
                runtime_pin::VARIANT_NODE_VERSION,
                runtime_pin::VARIANT_ENGINES,
            ])
            .with_priority(4)
            .with_tag(PatternTag::CriticalGap),
        PatternDefinition::new(collocation::PATTERN, PatternCategory::Testing)
            .with_description("Test collocation vs central test trees")
            .with_variants([
                collocation::VARIANT_COLLOCATED,
                collocation::VARIANT_CENTRALIZED,
            ])
            .with_priority(5)
            .with_applicability(ApplicabilityRule::AnyOf {
                rules: vec![
                    ApplicabilityRule::HasFileMatching {
                        glob: "**/*.test.*".to_string(),
                    },
                    ApplicabilityRule::HasFileMatching {
                        glob: "**/*.spec.*".to_string(),
                    },
                    ApplicabilityRule::HasFileMatching {
                        glob: "**/__tests__/**".to_string(),
                    },
                ],
            }),
        PatternDefinition::new(locale_layout::PATTERN, PatternCategory::Internationalization)
            .with_description("Per-locale directories vs flat catalog files")
            .with_variants([
                locale_layout::VARIANT_DIRECTORY,
                locale_layout::VARIANT_CATALOG,
            ])
            .with_priority(4)
            .with_tag(PatternTag::Recommended)
            .with_applicability(ApplicabilityRule::MetadataAtLeast {
                key: "locales".to_string(),
                min: 2,
            }),
    ]
}
