//! Component test collocation — tests next to their subjects vs central
//! test trees.
//!
//! Needs the whole file inventory at once: "is there a sibling with the
//! same stem" cannot be answered file by file. Both variants may be emitted
//! for one repository; mid-migration hybrids are preserved, never collapsed.

use census_core::errors::ExtractError;
use census_core::types::collections::FxHashSet;
use census_core::types::identifiers::{PatternId, VariantName};
use census_core::types::signal::PatternSignal;
use census_core::types::source::{FileRole, SourceFile};

use crate::extract::context::RepositoryView;
use crate::extract::traits::RepositoryExtractor;

pub const PATTERN: &str = "component-collocation";
pub const VARIANT_COLLOCATED: &str = "collocated";
pub const VARIANT_CENTRALIZED: &str = "centralized";

const TEST_DIRS: &[&str] = &["__tests__", "tests", "test"];

pub struct CollocationExtractor;

impl RepositoryExtractor for CollocationExtractor {
    fn id(&self) -> &'static str {
        "collocation"
    }

    fn pattern(&self) -> PatternId {
        PatternId::from(PATTERN)
    }

    fn extract(&self, view: &RepositoryView<'_>) -> Result<Vec<PatternSignal>, ExtractError> {
        // (directory, stem) pairs of every non-test source file
        let subjects: FxHashSet<(&str, &str)> = view
            .files
            .iter()
            .filter(|f| !f.has_role(FileRole::Test))
            .map(|f| split_dir_stem(&f.path))
            .collect();

        let mut signals = Vec::new();
        for test_file in view.files_with_role(FileRole::Test) {
            if let Some(variant) = classify_test_file(test_file, &subjects) {
                signals.push(view.signal(
                    &self.pattern(),
                    Some(VariantName::from(variant)),
                    test_file.path.clone(),
                    format!("{variant} test {}", test_file.file_name()),
                ));
            }
        }
        Ok(signals)
    }
}

fn classify_test_file(
    file: &SourceFile,
    subjects: &FxHashSet<(&str, &str)>,
) -> Option<&'static str> {
    if file.components().any(|c| TEST_DIRS.contains(&c)) {
        return Some(VARIANT_CENTRALIZED);
    }
    let (dir, stem) = split_dir_stem(&file.path);
    // Button.test.tsx collocates with Button.tsx in the same directory
    let subject_stem = stem
        .strip_suffix(".test")
        .or_else(|| stem.strip_suffix(".spec"))
        .unwrap_or(stem);
    if subject_stem != stem && subjects.contains(&(dir, subject_stem)) {
        return Some(VARIANT_COLLOCATED);
    }
    None
}

/// Directory prefix and file stem without the final extension.
fn split_dir_stem(path: &str) -> (&str, &str) {
    let (dir, file_name) = path.rsplit_once('/').unwrap_or(("", path));
    let stem = file_name.rsplit_once('.').map(|(s, _)| s).unwrap_or(file_name);
    (dir, stem)
}
