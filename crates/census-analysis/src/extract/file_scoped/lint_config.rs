//! Lint configuration shape — flat config vs legacy rc files.

use aho_corasick::AhoCorasick;

use census_core::errors::ExtractError;
use census_core::types::identifiers::{PatternId, VariantName};
use census_core::types::signal::PatternSignal;
use census_core::types::source::{FileRole, SourceFile};

use crate::extract::context::FileContext;
use crate::extract::traits::FileExtractor;

pub const PATTERN: &str = "lint-config";
pub const VARIANT_FLAT: &str = "flat-config";
pub const VARIANT_LEGACY: &str = "legacy-rc";

/// Rule-set markers scanned in one pass over the config content.
const MARKERS: &[&str] = &[
    "defineConfig",
    "eslint:recommended",
    "plugin:",
    "typescript-eslint",
    "prettier",
];

pub struct LintConfigExtractor {
    markers: Option<AhoCorasick>,
}

impl LintConfigExtractor {
    pub fn new() -> Self {
        Self {
            markers: AhoCorasick::new(MARKERS).ok(),
        }
    }

    fn marker_summary(&self, content: &str) -> Option<String> {
        let automaton = self.markers.as_ref()?;
        let mut found: Vec<&str> = automaton
            .find_iter(content)
            .map(|m| MARKERS[m.pattern().as_usize()])
            .collect();
        found.sort_unstable();
        found.dedup();
        if found.is_empty() {
            None
        } else {
            Some(found.join(", "))
        }
    }
}

impl Default for LintConfigExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FileExtractor for LintConfigExtractor {
    fn id(&self) -> &'static str {
        "lint-config"
    }

    fn pattern(&self) -> PatternId {
        PatternId::from(PATTERN)
    }

    fn matches(&self, file: &SourceFile) -> bool {
        file.has_role(FileRole::LintConfig)
    }

    fn needs_content(&self) -> bool {
        true
    }

    fn extract(&self, ctx: &FileContext<'_>) -> Result<Vec<PatternSignal>, ExtractError> {
        let file_name = ctx.file.file_name();
        let variant = if file_name.starts_with("eslint.config.") {
            VARIANT_FLAT
        } else {
            VARIANT_LEGACY
        };

        // The filename decides the variant; content markers only enrich detail.
        let mut detail = format!("lint config {file_name}");
        if let Some(markers) = ctx.content.and_then(|c| self.marker_summary(c)) {
            detail.push_str(&format!(" (markers: {markers})"));
        }

        Ok(vec![ctx.signal(
            &self.pattern(),
            Some(VariantName::from(variant)),
            detail,
        )])
    }
}
