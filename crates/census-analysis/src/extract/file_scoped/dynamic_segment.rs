//! Dynamic route segment detection — `[param]` and `[...rest]` folders.

use census_core::errors::ExtractError;
use census_core::types::identifiers::PatternId;
use census_core::types::signal::PatternSignal;
use census_core::types::source::SourceFile;

use crate::extract::context::FileContext;
use crate::extract::traits::FileExtractor;
use crate::walker::roles;

pub const PATTERN: &str = "dynamic-route-segments";

/// Presence-based: any bracketed path component counts, whether a single
/// parameter (`[slug]`) or a catch-all (`[...rest]`).
pub struct DynamicSegmentExtractor;

impl FileExtractor for DynamicSegmentExtractor {
    fn id(&self) -> &'static str {
        "dynamic-segment"
    }

    fn pattern(&self) -> PatternId {
        PatternId::from(PATTERN)
    }

    fn matches(&self, file: &SourceFile) -> bool {
        roles::is_script_extension(&file.extension)
            && file.components().any(is_dynamic_segment)
    }

    fn extract(&self, ctx: &FileContext<'_>) -> Result<Vec<PatternSignal>, ExtractError> {
        let Some(segment) = ctx.file.components().find(|c| is_dynamic_segment(c)) else {
            return Ok(Vec::new());
        };
        let kind = if segment.starts_with("[...") {
            "catch-all"
        } else {
            "single-parameter"
        };
        Ok(vec![ctx.signal(
            &self.pattern(),
            None,
            format!("{kind} segment {segment}"),
        )])
    }
}

fn is_dynamic_segment(component: &str) -> bool {
    component.len() > 2 && component.starts_with('[') && component.ends_with(']')
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_core::types::identifiers::RepoId;
    use smallvec::smallvec;

    fn file(path: &str) -> SourceFile {
        let extension = path.rsplit('.').next().unwrap_or("").to_string();
        SourceFile {
            path: path.to_string(),
            extension,
            size: 0,
            roles: smallvec![],
        }
    }

    #[test]
    fn bracketed_folder_matches() {
        assert!(DynamicSegmentExtractor.matches(&file("app/blog/[slug]/page.tsx")));
        assert!(DynamicSegmentExtractor.matches(&file("pages/docs/[...path].tsx")));
        assert!(!DynamicSegmentExtractor.matches(&file("app/blog/page.tsx")));
    }

    #[test]
    fn catch_all_noted_in_detail() {
        let repo = RepoId::from("r");
        let f = file("pages/docs/[...path].tsx");
        let ctx = FileContext {
            repository: &repo,
            file: &f,
            content: None,
        };
        let signals = DynamicSegmentExtractor.extract(&ctx).unwrap();
        assert_eq!(signals.len(), 1);
        assert!(signals[0].variant.is_none());
        assert!(signals[0].detail.contains("catch-all"));
    }
}
