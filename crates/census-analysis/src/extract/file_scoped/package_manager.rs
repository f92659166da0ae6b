//! Package manager detection from root-level lockfiles.

use census_core::errors::ExtractError;
use census_core::types::identifiers::{PatternId, VariantName};
use census_core::types::signal::PatternSignal;
use census_core::types::source::SourceFile;

use crate::extract::context::FileContext;
use crate::extract::traits::FileExtractor;

pub const PATTERN: &str = "package-manager";
pub const VARIANT_NPM: &str = "npm";
pub const VARIANT_YARN: &str = "yarn";
pub const VARIANT_PNPM: &str = "pnpm";
pub const VARIANT_BUN: &str = "bun";

/// Only root-level lockfiles count; nested lockfiles in fixtures or
/// workspaces do not decide the repository's package manager.
pub struct PackageManagerExtractor;

fn lockfile_variant(file_name: &str) -> Option<&'static str> {
    match file_name {
        "package-lock.json" | "npm-shrinkwrap.json" => Some(VARIANT_NPM),
        "yarn.lock" => Some(VARIANT_YARN),
        "pnpm-lock.yaml" => Some(VARIANT_PNPM),
        "bun.lockb" | "bun.lock" => Some(VARIANT_BUN),
        _ => None,
    }
}

impl FileExtractor for PackageManagerExtractor {
    fn id(&self) -> &'static str {
        "package-manager"
    }

    fn pattern(&self) -> PatternId {
        PatternId::from(PATTERN)
    }

    fn matches(&self, file: &SourceFile) -> bool {
        !file.path.contains('/') && lockfile_variant(&file.path).is_some()
    }

    fn extract(&self, ctx: &FileContext<'_>) -> Result<Vec<PatternSignal>, ExtractError> {
        let Some(variant) = lockfile_variant(ctx.file.file_name()) else {
            return Ok(Vec::new());
        };
        Ok(vec![ctx.signal(
            &self.pattern(),
            Some(VariantName::from(variant)),
            format!("lockfile {} at repository root", ctx.file.path),
        )])
    }
}
