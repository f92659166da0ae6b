//! Routing style detection — app-directory vs pages-directory families.

use census_core::errors::ExtractError;
use census_core::types::identifiers::{PatternId, VariantName};
use census_core::types::signal::PatternSignal;
use census_core::types::source::SourceFile;

use crate::extract::context::FileContext;
use crate::extract::traits::FileExtractor;
use crate::walker::roles;

pub const PATTERN: &str = "routing-style";
pub const VARIANT_APP: &str = "app-router";
pub const VARIANT_PAGES: &str = "pages-router";

/// Special file stems that mark an app-directory route segment.
const APP_SEGMENT_FILES: &[&str] = &[
    "page", "layout", "template", "route", "loading", "error", "not-found",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoutingFamily {
    App,
    Pages,
}

pub struct RouterStyleExtractor;

impl FileExtractor for RouterStyleExtractor {
    fn id(&self) -> &'static str {
        "routing-style"
    }

    fn pattern(&self) -> PatternId {
        PatternId::from(PATTERN)
    }

    fn matches(&self, file: &SourceFile) -> bool {
        roles::is_script_extension(&file.extension) && routing_family(&file.path).is_some()
    }

    fn extract(&self, ctx: &FileContext<'_>) -> Result<Vec<PatternSignal>, ExtractError> {
        let file_name = ctx.file.file_name();
        let stem = file_name
            .split_once('.')
            .map(|(s, _)| s)
            .unwrap_or(file_name);

        let signal = match routing_family(&ctx.file.path) {
            Some(RoutingFamily::App) if APP_SEGMENT_FILES.contains(&stem) => Some(ctx.signal(
                &self.pattern(),
                Some(VariantName::from(VARIANT_APP)),
                format!("app-directory segment file {file_name}"),
            )),
            Some(RoutingFamily::Pages) => Some(ctx.signal(
                &self.pattern(),
                Some(VariantName::from(VARIANT_PAGES)),
                format!("pages-directory route {file_name}"),
            )),
            _ => None,
        };
        Ok(signal.into_iter().collect())
    }
}

/// Which routing directory family the path belongs to, if any.
/// `app/` and `pages/` are recognized at the root or directly under `src/`.
fn routing_family(path: &str) -> Option<RoutingFamily> {
    let mut components = path.split('/');
    let mut head = components.next()?;
    if head == "src" {
        head = components.next()?;
    }
    // the head must be a directory, not the file itself
    components.next()?;
    match head {
        "app" => Some(RoutingFamily::App),
        "pages" => Some(RoutingFamily::Pages),
        _ => None,
    }
}
