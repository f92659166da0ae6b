//! Locale resource layout — per-locale directories vs flat catalog files.
//!
//! Repository-scoped: the distinction is between `locales/en/common.json`
//! families and `locales/en.json` catalogs, visible only across the whole
//! inventory.

use std::collections::BTreeSet;

use census_core::errors::ExtractError;
use census_core::types::identifiers::{PatternId, VariantName};
use census_core::types::signal::PatternSignal;
use census_core::types::source::{FileRole, SourceFile};

use crate::extract::context::RepositoryView;
use crate::extract::traits::RepositoryExtractor;

pub const PATTERN: &str = "i18n-layout";
pub const VARIANT_DIRECTORY: &str = "directory-per-locale";
pub const VARIANT_CATALOG: &str = "single-catalog";

const LOCALE_DIRS: &[&str] = &["locales", "i18n", "lang", "translations"];

pub struct LocaleLayoutExtractor;

impl RepositoryExtractor for LocaleLayoutExtractor {
    fn id(&self) -> &'static str {
        "locale-layout"
    }

    fn pattern(&self) -> PatternId {
        PatternId::from(PATTERN)
    }

    fn extract(&self, view: &RepositoryView<'_>) -> Result<Vec<PatternSignal>, ExtractError> {
        // one signal per locale directory, not per resource file
        let mut locale_dirs: BTreeSet<String> = BTreeSet::new();
        let mut catalogs: BTreeSet<&str> = BTreeSet::new();

        for file in view.files_with_role(FileRole::Locale) {
            match locale_shape(file) {
                Some(LocaleShape::Directory(dir)) => {
                    locale_dirs.insert(dir);
                }
                Some(LocaleShape::Catalog) => {
                    catalogs.insert(file.path.as_str());
                }
                None => {}
            }
        }

        let mut signals = Vec::new();
        for dir in locale_dirs {
            signals.push(view.signal(
                &self.pattern(),
                Some(VariantName::from(VARIANT_DIRECTORY)),
                dir.clone(),
                format!("locale directory {dir}"),
            ));
        }
        for catalog in catalogs {
            signals.push(view.signal(
                &self.pattern(),
                Some(VariantName::from(VARIANT_CATALOG)),
                catalog,
                format!("flat locale catalog {catalog}"),
            ));
        }
        Ok(signals)
    }
}

enum LocaleShape {
    /// `locales/<code>/<resource>.json`
    Directory(String),
    /// `locales/<code>.json`
    Catalog,
}

fn locale_shape(file: &SourceFile) -> Option<LocaleShape> {
    let components: Vec<&str> = file.components().collect();
    let root_idx = components
        .iter()
        .position(|c| LOCALE_DIRS.contains(c))?;
    let after = &components[root_idx + 1..];
    match after {
        [code, _resource, ..] if looks_like_locale(code) => Some(LocaleShape::Directory(
            components[..=root_idx + 1].join("/"),
        )),
        [file_name] => {
            let code = file_name.strip_suffix(".json")?;
            looks_like_locale(code).then_some(LocaleShape::Catalog)
        }
        _ => None,
    }
}

/// `en`, `pt-BR`, `zh-Hans` — short alphabetic tags, optionally hyphenated.
fn looks_like_locale(code: &str) -> bool {
    let mut parts = code.split('-');
    let Some(primary) = parts.next() else {
        return false;
    };
    if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    parts.all(|p| (2..=4).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphanumeric()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_core::types::identifiers::RepoId;
    use crate::walker::roles;

    fn file(path: &str) -> SourceFile {
        let extension = path.rsplit('.').next().unwrap_or("").to_string();
        SourceFile {
            path: path.to_string(),
            extension: extension.clone(),
            size: 0,
            roles: roles::classify(path, &extension),
        }
    }

    fn extract(paths: &[&str]) -> Vec<PatternSignal> {
        let repo = RepoId::from("r");
        let files: Vec<SourceFile> = paths.iter().map(|p| file(p)).collect();
        let view = RepositoryView {
            repository: &repo,
            files: &files,
            file_signals: &[],
        };
        LocaleLayoutExtractor.extract(&view).unwrap()
    }

    #[test]
    fn nested_locale_dirs_detected_once_per_locale() {
        let signals = extract(&[
            "locales/en/common.json",
            "locales/en/errors.json",
            "locales/de/common.json",
        ]);
        assert_eq!(signals.len(), 2, "one signal per locale directory");
        assert!(signals
            .iter()
            .all(|s| s.variant == Some(VariantName::from(VARIANT_DIRECTORY))));
    }

    #[test]
    fn flat_catalogs_detected() {
        let signals = extract(&["i18n/en.json", "i18n/pt-BR.json"]);
        assert_eq!(signals.len(), 2);
        assert!(signals
            .iter()
            .all(|s| s.variant == Some(VariantName::from(VARIANT_CATALOG))));
    }

    #[test]
    fn non_locale_json_ignored() {
        let signals = extract(&["locales/README.json", "config/settings.json"]);
        assert!(signals.is_empty());
    }

    #[test]
    fn locale_codes_validated() {
        assert!(looks_like_locale("en"));
        assert!(looks_like_locale("pt-BR"));
        assert!(looks_like_locale("zh-Hans"));
        assert!(!looks_like_locale("README"));
        assert!(!looks_like_locale("x"));
    }
}
