//! TypeScript strictness from tsconfig compiler options.

use census_core::errors::ExtractError;
use census_core::types::identifiers::{PatternId, VariantName};
use census_core::types::signal::PatternSignal;
use census_core::types::source::{FileRole, SourceFile};

use crate::extract::context::FileContext;
use crate::extract::traits::FileExtractor;

pub const PATTERN: &str = "typescript-strictness";
pub const VARIANT_STRICT: &str = "strict";
pub const VARIANT_LOOSE: &str = "loose";

pub struct TsconfigStrictnessExtractor;

impl FileExtractor for TsconfigStrictnessExtractor {
    fn id(&self) -> &'static str {
        "tsconfig-strictness"
    }

    fn pattern(&self) -> PatternId {
        PatternId::from(PATTERN)
    }

    fn matches(&self, file: &SourceFile) -> bool {
        file.has_role(FileRole::TypeConfig) && file.file_name().starts_with("tsconfig")
    }

    fn needs_content(&self) -> bool {
        true
    }

    fn extract(&self, ctx: &FileContext<'_>) -> Result<Vec<PatternSignal>, ExtractError> {
        let Some(content) = ctx.content else {
            return Ok(Vec::new());
        };
        let config: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ExtractError::Parse {
                file: ctx.file.path.clone(),
                message: e.to_string(),
            })?;

        let options = config.get("compilerOptions");
        let flag = |name: &str| {
            options
                .and_then(|o| o.get(name))
                .and_then(|v| v.as_bool())
                .unwrap_or(false)
        };

        // `strict` switches the whole family on; the two load-bearing
        // member flags together are treated as equivalent.
        let strict = flag("strict") || (flag("strictNullChecks") && flag("noImplicitAny"));
        let variant = if strict { VARIANT_STRICT } else { VARIANT_LOOSE };
        Ok(vec![ctx.signal(
            &self.pattern(),
            Some(VariantName::from(variant)),
            format!("{} compilerOptions", ctx.file.path),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_core::types::identifiers::RepoId;
    use smallvec::smallvec;

    fn extract(content: &str) -> Result<Vec<PatternSignal>, ExtractError> {
        let repo = RepoId::from("r");
        let f = SourceFile {
            path: "tsconfig.json".to_string(),
            extension: "json".to_string(),
            size: 0,
            roles: smallvec![FileRole::TypeConfig],
        };
        let ctx = FileContext {
            repository: &repo,
            file: &f,
            content: Some(content),
        };
        TsconfigStrictnessExtractor.extract(&ctx)
    }

    #[test]
    fn strict_flag_yields_strict() {
        let signals = extract(r#"{"compilerOptions": {"strict": true}}"#).unwrap();
        assert_eq!(signals[0].variant, Some(VariantName::from(VARIANT_STRICT)));
    }

    #[test]
    fn member_flags_count_as_strict() {
        let signals = extract(
            r#"{"compilerOptions": {"strictNullChecks": true, "noImplicitAny": true}}"#,
        )
        .unwrap();
        assert_eq!(signals[0].variant, Some(VariantName::from(VARIANT_STRICT)));
    }

    #[test]
    fn missing_options_yield_loose() {
        let signals = extract(r#"{"compilerOptions": {}}"#).unwrap();
        assert_eq!(signals[0].variant, Some(VariantName::from(VARIANT_LOOSE)));
        let signals = extract("{}").unwrap();
        assert_eq!(signals[0].variant, Some(VariantName::from(VARIANT_LOOSE)));
    }

    #[test]
    fn jsonc_comments_are_a_parse_error() {
        let result = extract("// project config\n{\"compilerOptions\": {}}");
        assert!(matches!(result, Err(ExtractError::Parse { .. })));
    }
}
