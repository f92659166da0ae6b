//! Parallel repository walker using the `ignore` crate's `WalkParallel`.
//!
//! Honors `.gitignore` plus the default ignore list; per-subtree read
//! failures become warnings and the walk continues around them.

use std::path::Path;

use crossbeam_channel as channel;

use census_core::config::WalkConfig;
use census_core::errors::WalkError;
use census_core::types::corpus::RepoSpec;
use census_core::types::source::SourceFile;
use census_core::types::warning::{RunWarning, WarningKind};

use crate::run::deadline::Deadline;

use super::roles;
use super::types::WalkOutcome;

/// Default ignore patterns applied to every walk — build output, dependency
/// caches, and framework scratch directories.
pub const DEFAULT_IGNORES: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "out",
    ".output",
    ".next",
    ".nuxt",
    ".svelte-kit",
    ".turbo",
    ".cache",
    ".vercel",
    ".netlify",
    "coverage",
    ".nyc_output",
    "storybook-static",
    "vendor",
];

enum WalkItem {
    File(SourceFile),
    Warning(RunWarning),
}

/// Walk one repository tree, honoring exclusion rules.
///
/// Files come back sorted by path — a finite, restartable sequence. Only a
/// completely unreadable root is fatal, and then only for this repository.
pub fn walk_repository(
    spec: &RepoSpec,
    config: &WalkConfig,
    deadline: &Deadline,
) -> Result<WalkOutcome, WalkError> {
    let root = spec.root.as_path();
    if let Err(e) = std::fs::read_dir(root) {
        return Err(WalkError::RootUnreadable {
            path: root.to_path_buf(),
            message: e.to_string(),
        });
    }

    let (tx, rx) = channel::unbounded();

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .max_filesize(Some(config.effective_max_file_size()))
        .follow_links(config.effective_follow_symlinks());
    if config.effective_threads() > 0 {
        builder.threads(config.effective_threads());
    }

    // Overrides use gitignore syntax: positive patterns whitelist, negated
    // patterns blacklist. Includes go first so the blacklist still applies.
    let mut overrides = ignore::overrides::OverrideBuilder::new(root);
    for pattern in &config.include {
        let _ = overrides.add(pattern);
    }
    for pattern in DEFAULT_IGNORES {
        let _ = overrides.add(&format!("!{}/**", pattern));
        let _ = overrides.add(&format!("!{}", pattern));
    }
    for pattern in &config.extra_ignore {
        let _ = overrides.add(&format!("!{}", pattern));
    }
    if let Ok(built) = overrides.build() {
        builder.overrides(built);
    }

    let walker = builder.build_parallel();
    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            if deadline.expired() {
                return ignore::WalkState::Quit;
            }

            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    let _ = tx.send(WalkItem::Warning(
                        RunWarning::new(WarningKind::SubtreeSkipped, e.to_string())
                            .with_repository(spec.id.clone()),
                    ));
                    return ignore::WalkState::Continue;
                }
            };

            // Only regular files become SourceFile snapshots
            match entry.file_type() {
                Some(ft) if ft.is_file() => {}
                _ => return ignore::WalkState::Continue,
            }

            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(e) => {
                    let _ = tx.send(WalkItem::Warning(
                        RunWarning::new(WarningKind::FileUnreadable, e.to_string())
                            .with_repository(spec.id.clone())
                            .with_file(entry.path().display().to_string()),
                    ));
                    return ignore::WalkState::Continue;
                }
            };

            let path = relative_slash_path(entry.path(), root);
            let extension = entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_ascii_lowercase())
                .unwrap_or_default();
            let file_roles = roles::classify(&path, &extension);

            let _ = tx.send(WalkItem::File(SourceFile {
                path,
                extension,
                size: metadata.len(),
                roles: file_roles,
            }));

            ignore::WalkState::Continue
        })
    });
    drop(tx);

    let mut outcome = WalkOutcome::default();
    for item in rx {
        match item {
            WalkItem::File(file) => outcome.files.push(file),
            WalkItem::Warning(warning) => outcome.warnings.push(warning),
        }
    }
    // Sort for deterministic output
    outcome.files.sort_by(|a, b| a.path.cmp(&b.path));
    outcome.warnings.sort();
    outcome.interrupted = deadline.expired();
    Ok(outcome)
}

fn relative_slash_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}
