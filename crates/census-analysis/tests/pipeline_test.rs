//! End-to-end engine tests over real on-disk corpora.

use std::fs;
use std::path::Path;

use census_analysis::Engine;
use census_core::config::{RunConfig, TimeoutPolicy};
use census_core::errors::RunError;
use census_core::types::corpus::{CorpusSpec, RepoSpec};
use census_core::types::findings::FindingCategory;
use census_core::types::identifiers::{PatternId, RepoId, VariantName};
use census_core::types::warning::WarningKind;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Three repositories mirroring a mid-migration corpus: one app-router, one
/// pages-router, one straddling both.
fn routing_corpus(base: &Path) -> CorpusSpec {
    let a = base.join("storefront");
    write(&a, "app/page.tsx", "export default function Page() {}");
    write(&a, "app/blog/[slug]/page.tsx", "export default function Post() {}");
    write(&a, "pnpm-lock.yaml", "lockfileVersion: 9");
    write(&a, "tsconfig.json", r#"{"compilerOptions": {"strict": true}}"#);

    let b = base.join("dashboard");
    write(&b, "pages/index.tsx", "export default function Home() {}");
    write(&b, "pages/_app.tsx", "export default function App() {}");
    write(&b, "yarn.lock", "# yarn lockfile v1");
    write(&b, "tsconfig.json", r#"{"compilerOptions": {"strict": false}}"#);

    let c = base.join("docs-site");
    write(&c, "app/page.tsx", "export default function Page() {}");
    write(&c, "pages/legacy.tsx", "export default function Legacy() {}");
    write(&c, "package-lock.json", "{}");
    write(&c, "tsconfig.json", r#"{"compilerOptions": {"strict": true}}"#);

    CorpusSpec::new(vec![
        RepoSpec::new("storefront", a),
        RepoSpec::new("dashboard", b),
        RepoSpec::new("docs-site", c),
    ])
}

#[test]
fn routing_hybrid_example_classifies_app_router_dominant() {
    census_core::tracing::init();
    let base = tempfile::tempdir().unwrap();
    let corpus = routing_corpus(base.path());
    let engine = Engine::with_defaults(RunConfig::default()).unwrap();

    let document = engine.run(&corpus).unwrap();

    let routing = document
        .findings
        .iter()
        .find(|f| f.pattern == PatternId::from("routing-style"))
        .expect("routing-style finding");
    assert_eq!(routing.category, FindingCategory::DominantPattern);
    assert_eq!(routing.variant, Some(VariantName::from("app-router")));

    let record = &routing.supporting_records[0];
    assert_eq!(record.denominator, 3);
    assert_eq!(record.percentage, 66.67);
    // the hybrid repo backs the dominant variant alongside the pure one
    assert!(record.repositories.contains(&RepoId::from("storefront")));
    assert!(record.repositories.contains(&RepoId::from("docs-site")));
}

#[test]
fn lockfile_gap_produces_migration_candidate() {
    let base = tempfile::tempdir().unwrap();
    let a = base.path().join("pinned");
    write(&a, "pnpm-lock.yaml", "lockfileVersion: 9");
    write(&a, "src/index.ts", "");
    let b = base.path().join("unpinned");
    write(&b, "src/index.ts", "");

    let corpus = CorpusSpec::new(vec![
        RepoSpec::new("pinned", a),
        RepoSpec::new("unpinned", b),
    ]);
    let engine = Engine::with_defaults(RunConfig::default()).unwrap();
    let document = engine.run(&corpus).unwrap();

    let candidates: Vec<_> = document
        .findings
        .iter()
        .filter(|f| {
            f.pattern == PatternId::from("package-manager")
                && f.category == FindingCategory::MigrationCandidate
        })
        .collect();
    assert_eq!(candidates.len(), 1);
    assert_eq!(
        candidates[0].affected_repositories,
        vec![RepoId::from("unpinned")]
    );
}

#[test]
fn runtime_pin_gap_is_one_critical_gap_finding() {
    let base = tempfile::tempdir().unwrap();
    for name in ["one", "two", "three"] {
        write(&base.path().join(name), "src/index.ts", "");
    }
    let corpus = CorpusSpec::new(
        ["one", "two", "three"]
            .iter()
            .map(|n| RepoSpec::new(*n, base.path().join(n)))
            .collect(),
    );
    let engine = Engine::with_defaults(RunConfig::default()).unwrap();
    let document = engine.run(&corpus).unwrap();

    let gaps: Vec<_> = document
        .findings
        .iter()
        .filter(|f| f.category == FindingCategory::CriticalGap)
        .filter(|f| f.pattern == PatternId::from("runtime-version-pin"))
        .collect();
    assert_eq!(gaps.len(), 1, "one finding for the whole pattern");
    assert_eq!(gaps[0].affected_repositories.len(), 3);
}

#[test]
fn two_runs_over_unchanged_corpus_are_byte_identical() {
    let base = tempfile::tempdir().unwrap();
    let corpus = routing_corpus(base.path());
    let engine = Engine::with_defaults(RunConfig::default()).unwrap();

    let first = engine.run(&corpus).unwrap();
    let second = engine.run(&corpus).unwrap();

    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    assert_eq!(first.summary.fingerprint, second.summary.fingerprint);
}

#[test]
fn timeout_mid_extraction_aborts_with_zero_findings() {
    let base = tempfile::tempdir().unwrap();
    let corpus = routing_corpus(base.path());
    let config = RunConfig {
        timeout_ms: Some(0),
        ..RunConfig::default()
    };
    let engine = Engine::with_defaults(config).unwrap();

    // default policy: a timed-out scan aborts the run; never a partial set
    let result = engine.run(&corpus);
    assert!(matches!(result, Err(RunError::DeadlineExceeded { .. })));
}

#[test]
fn degrade_policy_excludes_inconclusive_repositories() {
    let base = tempfile::tempdir().unwrap();
    let corpus = routing_corpus(base.path());
    let config = RunConfig {
        timeout_ms: Some(0),
        timeout_policy: Some(TimeoutPolicy::Degrade),
        ..RunConfig::default()
    };
    let engine = Engine::with_defaults(config).unwrap();

    let document = engine.run(&corpus).unwrap();
    assert!(document.findings.is_empty(), "no conclusive repositories");
    assert_eq!(document.summary.repositories_inconclusive, 3);
    assert!(document
        .warnings
        .iter()
        .any(|w| w.kind == WarningKind::RepositoryInconclusive));
}

#[test]
fn unreadable_root_skips_that_repository_only() {
    let base = tempfile::tempdir().unwrap();
    let good = base.path().join("good");
    write(&good, "app/page.tsx", "");
    write(&good, "pnpm-lock.yaml", "");

    let corpus = CorpusSpec::new(vec![
        RepoSpec::new("good", good),
        RepoSpec::new("ghost", base.path().join("missing")),
    ]);
    let engine = Engine::with_defaults(RunConfig::default()).unwrap();
    let document = engine.run(&corpus).unwrap();

    assert_eq!(document.summary.repositories_scanned, 1);
    assert_eq!(document.summary.repositories_skipped, 1);
    assert!(document
        .warnings
        .iter()
        .any(|w| w.kind == WarningKind::RepositorySkipped
            && w.repository == Some(RepoId::from("ghost"))));
    assert!(!document.findings.is_empty(), "the good repo still counts");
}

#[test]
fn malformed_manifest_surfaces_as_parse_warning() {
    let base = tempfile::tempdir().unwrap();
    let repo = base.path().join("broken");
    write(&repo, "package.json", "{not valid json");
    write(&repo, "src/index.ts", "");

    let corpus = CorpusSpec::new(vec![RepoSpec::new("broken", repo)]);
    let engine = Engine::with_defaults(RunConfig::default()).unwrap();
    let document = engine.run(&corpus).unwrap();

    assert!(document.warnings.iter().any(|w| {
        w.kind == WarningKind::ParseFailure
            && w.file.as_deref() == Some("package.json")
            && w.pattern == Some(PatternId::from("runtime-version-pin"))
    }));
}

#[test]
fn empty_corpus_is_a_config_error() {
    let engine = Engine::with_defaults(RunConfig::default()).unwrap();
    let result = engine.run(&CorpusSpec::default());
    assert!(matches!(result, Err(RunError::Config(_))));
}

#[test]
fn i18n_denominator_only_counts_multi_locale_repositories() {
    let base = tempfile::tempdir().unwrap();
    let multi = base.path().join("multi");
    write(&multi, "locales/en/common.json", "{}");
    write(&multi, "locales/de/common.json", "{}");
    let single = base.path().join("single");
    write(&single, "locales/en/common.json", "{}");

    let corpus = CorpusSpec::new(vec![
        RepoSpec::new("multi", multi).with_metadata("locales", "2"),
        RepoSpec::new("single", single).with_metadata("locales", "1"),
    ]);
    let engine = Engine::with_defaults(RunConfig::default()).unwrap();
    let document = engine.run(&corpus).unwrap();

    let i18n = document
        .findings
        .iter()
        .find(|f| f.pattern == PatternId::from("i18n-layout"))
        .expect("i18n finding");
    for record in &i18n.supporting_records {
        assert_eq!(record.denominator, 1, "single-locale repo excluded");
        assert!(!record.repositories.contains(&RepoId::from("single")));
    }
}
