//! Runtime version pinning — `.nvmrc`, `.node-version`, package.json
//! `engines`.

use census_core::errors::ExtractError;
use census_core::types::identifiers::{PatternId, VariantName};
use census_core::types::signal::PatternSignal;
use census_core::types::source::SourceFile;

use crate::extract::context::FileContext;
use crate::extract::traits::FileExtractor;

pub const PATTERN: &str = "runtime-version-pin";
pub const VARIANT_NVMRC: &str = "nvmrc";
pub const VARIANT_NODE_VERSION: &str = "node-version";
pub const VARIANT_ENGINES: &str = "engines-field";

pub struct RuntimePinExtractor;

impl FileExtractor for RuntimePinExtractor {
    fn id(&self) -> &'static str {
        "runtime-pin"
    }

    fn pattern(&self) -> PatternId {
        PatternId::from(PATTERN)
    }

    fn matches(&self, file: &SourceFile) -> bool {
        matches!(file.path.as_str(), ".nvmrc" | ".node-version" | "package.json")
    }

    fn needs_content(&self) -> bool {
        true
    }

    fn extract(&self, ctx: &FileContext<'_>) -> Result<Vec<PatternSignal>, ExtractError> {
        match ctx.file.path.as_str() {
            ".nvmrc" => Ok(vec![self.pin_signal(ctx, VARIANT_NVMRC)]),
            ".node-version" => Ok(vec![self.pin_signal(ctx, VARIANT_NODE_VERSION)]),
            "package.json" => self.extract_engines(ctx),
            _ => Ok(Vec::new()),
        }
    }
}

impl RuntimePinExtractor {
    fn pin_signal(&self, ctx: &FileContext<'_>, variant: &str) -> PatternSignal {
        let pinned = ctx
            .content
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .unwrap_or("unspecified");
        ctx.signal(
            &self.pattern(),
            Some(VariantName::from(variant)),
            format!("{} pins runtime {pinned}", ctx.file.path),
        )
    }

    fn extract_engines(
        &self,
        ctx: &FileContext<'_>,
    ) -> Result<Vec<PatternSignal>, ExtractError> {
        let Some(content) = ctx.content else {
            return Ok(Vec::new());
        };
        let manifest: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ExtractError::Parse {
                file: ctx.file.path.clone(),
                message: e.to_string(),
            })?;
        let Some(node) = manifest
            .get("engines")
            .and_then(|e| e.get("node"))
            .and_then(|n| n.as_str())
        else {
            return Ok(Vec::new());
        };
        Ok(vec![ctx.signal(
            &self.pattern(),
            Some(VariantName::from(VARIANT_ENGINES)),
            format!("package.json engines.node = {node}"),
        )])
    }
}
