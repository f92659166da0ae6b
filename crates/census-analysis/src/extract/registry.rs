//! ExtractorSet — registration, disable lists, panic isolation.

use census_core::types::collections::FxHashSet;
use census_core::types::signal::PatternSignal;
use census_core::types::source::SourceFile;
use census_core::types::warning::{RunWarning, WarningKind};

use super::context::{FileContext, RepositoryView};
use super::traits::{FileExtractor, RepositoryExtractor};

/// The set of extractors for one run, with disable lists and panic
/// isolation.
pub struct ExtractorSet {
    file_extractors: Vec<Box<dyn FileExtractor>>,
    repo_extractors: Vec<Box<dyn RepositoryExtractor>>,
    disabled: FxHashSet<String>,
}

impl ExtractorSet {
    pub fn new() -> Self {
        Self {
            file_extractors: Vec::new(),
            repo_extractors: Vec::new(),
            disabled: FxHashSet::default(),
        }
    }

    pub fn register_file(&mut self, extractor: Box<dyn FileExtractor>) {
        self.file_extractors.push(extractor);
    }

    pub fn register_repository(&mut self, extractor: Box<dyn RepositoryExtractor>) {
        self.repo_extractors.push(extractor);
    }

    /// Disable a specific extractor by id.
    pub fn disable(&mut self, id: &str) {
        self.disabled.insert(id.to_string());
    }

    /// Enable a previously disabled extractor.
    pub fn enable(&mut self, id: &str) {
        self.disabled.remove(id);
    }

    pub fn file_extractor_count(&self) -> usize {
        self.file_extractors.len()
    }

    pub fn repository_extractor_count(&self) -> usize {
        self.repo_extractors.len()
    }

    /// Whether any enabled file extractor both matches the file and wants
    /// its content.
    pub fn wants_content(&self, file: &SourceFile) -> bool {
        self.file_extractors.iter().any(|e| {
            !self.is_disabled(e.id()) && e.needs_content() && e.matches(file)
        })
    }

    /// Run all enabled file extractors against one file.
    ///
    /// A panicking extractor is isolated and logged; an extraction error
    /// becomes a parse-failure warning against that file/pattern only.
    pub fn run_file(&self, ctx: &FileContext<'_>) -> (Vec<PatternSignal>, Vec<RunWarning>) {
        let mut signals = Vec::new();
        let mut warnings = Vec::new();
        for extractor in &self.file_extractors {
            if self.is_disabled(extractor.id()) || !extractor.matches(ctx.file) {
                continue;
            }
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                extractor.extract(ctx)
            }));
            match result {
                Ok(Ok(found)) => signals.extend(found),
                Ok(Err(e)) => warnings.push(
                    RunWarning::new(WarningKind::ParseFailure, e.to_string())
                        .with_repository(ctx.repository.clone())
                        .with_file(ctx.file.path.clone())
                        .with_pattern(extractor.pattern()),
                ),
                Err(_) => {
                    tracing::error!(
                        extractor_id = extractor.id(),
                        file = %ctx.file.path,
                        "extractor panicked during extraction"
                    );
                }
            }
        }
        (signals, warnings)
    }

    /// Run all enabled repository extractors against one repository view.
    pub fn run_repository(
        &self,
        view: &RepositoryView<'_>,
    ) -> (Vec<PatternSignal>, Vec<RunWarning>) {
        let mut signals = Vec::new();
        let mut warnings = Vec::new();
        for extractor in &self.repo_extractors {
            if self.is_disabled(extractor.id()) {
                continue;
            }
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                extractor.extract(view)
            }));
            match result {
                Ok(Ok(found)) => signals.extend(found),
                Ok(Err(e)) => warnings.push(
                    RunWarning::new(WarningKind::ParseFailure, e.to_string())
                        .with_repository(view.repository.clone())
                        .with_pattern(extractor.pattern()),
                ),
                Err(_) => {
                    tracing::error!(
                        extractor_id = extractor.id(),
                        repository = %view.repository,
                        "extractor panicked during extraction"
                    );
                }
            }
        }
        (signals, warnings)
    }

    fn is_disabled(&self, id: &str) -> bool {
        self.disabled.contains(id)
    }
}

impl Default for ExtractorSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_core::errors::ExtractError;
    use census_core::types::identifiers::PatternId;
    use smallvec::smallvec;

    struct AlwaysSignals;

    impl FileExtractor for AlwaysSignals {
        fn id(&self) -> &'static str {
            "always-signals"
        }
        fn pattern(&self) -> PatternId {
            PatternId::from("test-pattern")
        }
        fn matches(&self, _file: &SourceFile) -> bool {
            true
        }
        fn extract(&self, ctx: &FileContext<'_>) -> Result<Vec<PatternSignal>, ExtractError> {
            Ok(vec![ctx.signal(&self.pattern(), None, "hit")])
        }
    }

    struct AlwaysPanics;

    impl FileExtractor for AlwaysPanics {
        fn id(&self) -> &'static str {
            "always-panics"
        }
        fn pattern(&self) -> PatternId {
            PatternId::from("test-pattern")
        }
        fn matches(&self, _file: &SourceFile) -> bool {
            true
        }
        fn extract(&self, _ctx: &FileContext<'_>) -> Result<Vec<PatternSignal>, ExtractError> {
            panic!("boom")
        }
    }

    fn file() -> SourceFile {
        SourceFile {
            path: "src/index.ts".to_string(),
            extension: "ts".to_string(),
            size: 10,
            roles: smallvec![],
        }
    }

    #[test]
    fn panicking_extractor_is_isolated() {
        let mut set = ExtractorSet::new();
        set.register_file(Box::new(AlwaysPanics));
        set.register_file(Box::new(AlwaysSignals));

        let repo = census_core::types::identifiers::RepoId::from("r");
        let file = file();
        let ctx = FileContext {
            repository: &repo,
            file: &file,
            content: None,
        };
        let (signals, warnings) = set.run_file(&ctx);
        assert_eq!(signals.len(), 1, "surviving extractor still runs");
        assert!(warnings.is_empty());
    }

    #[test]
    fn disabled_extractor_is_skipped() {
        let mut set = ExtractorSet::new();
        set.register_file(Box::new(AlwaysSignals));
        set.disable("always-signals");

        let repo = census_core::types::identifiers::RepoId::from("r");
        let file = file();
        let ctx = FileContext {
            repository: &repo,
            file: &file,
            content: None,
        };
        let (signals, _) = set.run_file(&ctx);
        assert!(signals.is_empty());

        set.enable("always-signals");
        let (signals, _) = set.run_file(&ctx);
        assert_eq!(signals.len(), 1);
    }
}
