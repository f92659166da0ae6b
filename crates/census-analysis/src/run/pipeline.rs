//! Run pipeline — walk, extract (two phases), aggregate, classify, export.
//!
//! The run-scoped context (registry, config, deadline, evidence) is created
//! at run start, threaded explicitly through every stage, and discarded at
//! run end; nothing is shared across runs.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use rayon::prelude::*;

use census_core::config::{RunConfig, TimeoutPolicy};
use census_core::errors::RunError;
use census_core::registry::PatternRegistry;
use census_core::types::corpus::{CorpusSpec, RepoSpec};
use census_core::types::findings::{Finding, FindingsDocument, RunSummary};
use census_core::types::identifiers::RepoId;
use census_core::types::signal::PatternSignal;
use census_core::types::source::SourceFile;
use census_core::types::warning::{RunWarning, WarningKind};

use crate::aggregate::{Aggregator, RepositoryProfile};
use crate::classify::Classifier;
use crate::evidence::EvidenceStore;
use crate::extract::context::{FileContext, RepositoryView};
use crate::extract::defaults::{default_extractors, default_pattern_definitions};
use crate::extract::registry::ExtractorSet;
use crate::walker::walk_repository;

use super::deadline::Deadline;

/// The convention-mining engine for one registry + extractor set.
pub struct Engine {
    registry: PatternRegistry,
    extractors: ExtractorSet,
    config: RunConfig,
}

enum RepoScan {
    Complete {
        profile: RepositoryProfile,
        signals: Vec<PatternSignal>,
        warnings: Vec<RunWarning>,
    },
    Skipped {
        warnings: Vec<RunWarning>,
    },
    Inconclusive {
        id: RepoId,
        warnings: Vec<RunWarning>,
    },
}

impl Engine {
    /// Build an engine over a validated registry. Fatal registry problems
    /// abort here, before any scanning begins.
    pub fn new(
        registry: PatternRegistry,
        extractors: ExtractorSet,
        config: RunConfig,
    ) -> Result<Self, RunError> {
        registry.validate_predicates()?;
        Ok(Self {
            registry,
            extractors,
            config,
        })
    }

    /// Engine over the built-in extractor set and its pattern definitions.
    pub fn with_defaults(config: RunConfig) -> Result<Self, RunError> {
        let registry = PatternRegistry::from_definitions(default_pattern_definitions())
            .map_err(RunError::from)?;
        Self::new(registry, default_extractors(), config)
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Execute one run over the corpus.
    ///
    /// Either a complete findings document is returned, or the run aborts
    /// with an error — partial documents are never published.
    pub fn run(&self, corpus: &CorpusSpec) -> Result<FindingsDocument, RunError> {
        corpus.validate().map_err(RunError::from)?;
        let deadline = Deadline::start(self.config.timeout_ms.map(Duration::from_millis));

        // Extraction is embarrassingly parallel across repositories; each
        // repository runs its own two-phase scan with its own barrier.
        let scans: Vec<RepoScan> = corpus
            .repositories
            .par_iter()
            .map(|spec| self.scan_repository(spec, &deadline))
            .collect();

        // Corpus-wide barrier: aggregation needs the complete applicable set.
        let mut warnings = Vec::new();
        let mut profiles = Vec::new();
        let mut evidence = EvidenceStore::new();
        let mut skipped = 0usize;
        let mut inconclusive = 0usize;
        let mut files_scanned = 0usize;

        for scan in scans {
            match scan {
                RepoScan::Complete {
                    profile,
                    signals,
                    warnings: scan_warnings,
                } => {
                    files_scanned += profile.files.len();
                    warnings.extend(scan_warnings);
                    self.admit_signals(signals, &mut evidence, &mut warnings);
                    profiles.push(profile);
                }
                RepoScan::Skipped {
                    warnings: scan_warnings,
                } => {
                    skipped += 1;
                    warnings.extend(scan_warnings);
                }
                RepoScan::Inconclusive {
                    id,
                    warnings: scan_warnings,
                } => {
                    inconclusive += 1;
                    warnings.extend(scan_warnings);
                    warnings.push(
                        RunWarning::new(
                            WarningKind::RepositoryInconclusive,
                            "scan aborted by the run deadline; repository excluded from all denominators",
                        )
                        .with_repository(id),
                    );
                }
            }
        }

        if inconclusive > 0
            && self.config.effective_timeout_policy() == TimeoutPolicy::Abort
        {
            return Err(RunError::DeadlineExceeded {
                elapsed_ms: deadline.elapsed_ms(),
                inconclusive,
            });
        }

        let adoption = Aggregator::new(&self.registry).aggregate(&profiles, &evidence);
        let patterns_evaluated = adoption
            .iter()
            .filter(|a| !a.applicable.is_empty())
            .count();
        let findings = Classifier::new(
            &self.registry,
            self.config.effective_dominance_threshold(),
        )
        .classify(&adoption);

        warnings.sort();
        let summary = build_summary(
            &findings,
            profiles.len(),
            skipped,
            inconclusive,
            files_scanned,
            evidence.len(),
            patterns_evaluated,
        );

        Ok(FindingsDocument {
            findings,
            warnings,
            summary,
        })
    }

    /// Two-phase scan of one repository: file-scoped extraction fans out
    /// across files into a thread-safe append-only sink, then the drain is
    /// this repository's barrier before the repository-scoped pass.
    fn scan_repository(&self, spec: &RepoSpec, deadline: &Deadline) -> RepoScan {
        if deadline.expired() {
            return RepoScan::Inconclusive {
                id: spec.id.clone(),
                warnings: Vec::new(),
            };
        }

        let outcome = match walk_repository(spec, &self.config.walk, deadline) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(repository = %spec.id, error = %e, "repository skipped");
                return RepoScan::Skipped {
                    warnings: vec![RunWarning::new(
                        WarningKind::RepositorySkipped,
                        e.to_string(),
                    )
                    .with_repository(spec.id.clone())],
                };
            }
        };
        if outcome.interrupted {
            return RepoScan::Inconclusive {
                id: spec.id.clone(),
                warnings: outcome.warnings,
            };
        }

        let (tx, rx) = crossbeam_channel::unbounded();
        outcome.files.par_iter().for_each(|file| {
            if deadline.expired() {
                return;
            }
            let mut file_warnings = Vec::new();
            let content = self.read_content_if_wanted(spec, file, &mut file_warnings);
            let ctx = FileContext {
                repository: &spec.id,
                file,
                content: content.as_deref(),
            };
            let (signals, extract_warnings) = self.extractors.run_file(&ctx);
            file_warnings.extend(extract_warnings);
            let _ = tx.send((signals, file_warnings));
        });
        drop(tx);

        let mut signals = Vec::new();
        let mut warnings = outcome.warnings;
        for (file_signals, file_warnings) in rx {
            signals.extend(file_signals);
            warnings.extend(file_warnings);
        }

        if deadline.expired() {
            // partial evidence is discarded wholesale; warnings survive
            return RepoScan::Inconclusive {
                id: spec.id.clone(),
                warnings,
            };
        }

        // Channel arrival order is nondeterministic; sort before the
        // repository-scoped pass so runs stay byte-identical.
        signals.sort();

        let view = RepositoryView {
            repository: &spec.id,
            files: &outcome.files,
            file_signals: &signals,
        };
        let (repo_signals, repo_warnings) = self.extractors.run_repository(&view);
        signals.extend(repo_signals);
        warnings.extend(repo_warnings);
        signals.sort();

        RepoScan::Complete {
            profile: RepositoryProfile {
                id: spec.id.clone(),
                metadata: spec.metadata.clone(),
                files: outcome.files,
            },
            signals,
            warnings,
        }
    }

    fn read_content_if_wanted(
        &self,
        spec: &RepoSpec,
        file: &SourceFile,
        warnings: &mut Vec<RunWarning>,
    ) -> Option<String> {
        if !self.extractors.wants_content(file) {
            return None;
        }
        match read_content(&spec.root, file) {
            Ok(content) => Some(content),
            Err(e) => {
                warnings.push(
                    RunWarning::new(WarningKind::FileUnreadable, e.to_string())
                        .with_repository(spec.id.clone())
                        .with_file(file.path.clone()),
                );
                None
            }
        }
    }

    /// Admit signals into the store, enforcing referential integrity: every
    /// signal must reference a declared pattern and, if variant-scoped, a
    /// declared variant. Rejects become warnings, never silent drops.
    fn admit_signals(
        &self,
        signals: Vec<PatternSignal>,
        evidence: &mut EvidenceStore,
        warnings: &mut Vec<RunWarning>,
    ) {
        for signal in signals {
            let Some(def) = self.registry.get(&signal.pattern) else {
                warnings.push(
                    RunWarning::new(
                        WarningKind::SignalRejected,
                        "signal references an undeclared pattern",
                    )
                    .with_repository(signal.repository)
                    .with_file(signal.file)
                    .with_pattern(signal.pattern),
                );
                continue;
            };
            let variant_ok = match (&signal.variant, def.is_variant_based()) {
                (Some(variant), true) => def.declares_variant(variant),
                (None, false) => true,
                _ => false,
            };
            if variant_ok {
                evidence.append(signal);
            } else {
                warnings.push(
                    RunWarning::new(
                        WarningKind::SignalRejected,
                        "signal variant is not declared on its pattern",
                    )
                    .with_repository(signal.repository)
                    .with_file(signal.file)
                    .with_pattern(signal.pattern),
                );
            }
        }
    }
}

fn read_content(root: &Path, file: &SourceFile) -> std::io::Result<String> {
    let bytes = std::fs::read(root.join(&file.path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn build_summary(
    findings: &[Finding],
    repositories_scanned: usize,
    repositories_skipped: usize,
    repositories_inconclusive: usize,
    files_scanned: usize,
    signals_collected: usize,
    patterns_evaluated: usize,
) -> RunSummary {
    let mut findings_by_category: BTreeMap<String, usize> = BTreeMap::new();
    for finding in findings {
        *findings_by_category
            .entry(finding.category.name().to_string())
            .or_insert(0) += 1;
    }
    RunSummary {
        repositories_scanned,
        repositories_skipped,
        repositories_inconclusive,
        files_scanned,
        signals_collected,
        patterns_evaluated,
        findings_by_category,
        fingerprint: FindingsDocument::fingerprint_of(findings),
    }
}
