//! Walker configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the repository walker.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WalkConfig {
    /// Maximum file size in bytes. Default: 1MB (1_048_576).
    pub max_file_size: Option<u64>,
    /// Walker threads. 0 = auto-detect.
    pub threads: Option<usize>,
    /// Include glob patterns — if non-empty, only matching paths are
    /// scanned. Gitignore syntax (e.g., "src/**", "apps/**").
    pub include: Vec<String>,
    /// Additional ignore patterns beyond the defaults.
    pub extra_ignore: Vec<String>,
    /// Follow symbolic links. Default: false.
    pub follow_symlinks: Option<bool>,
}

impl WalkConfig {
    /// Returns the effective max file size, defaulting to 1MB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(1_048_576)
    }

    /// Returns the effective thread count, defaulting to 0 (auto-detect).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }

    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = WalkConfig::default();
        assert_eq!(config.effective_max_file_size(), 1_048_576);
        assert_eq!(config.effective_threads(), 0);
        assert!(!config.effective_follow_symlinks());
    }

    #[test]
    fn deserializes_from_partial_toml() {
        let config: WalkConfig =
            toml::from_str("max_file_size = 2048\nextra_ignore = [\"fixtures\"]").unwrap();
        assert_eq!(config.effective_max_file_size(), 2048);
        assert_eq!(config.extra_ignore, vec!["fixtures".to_string()]);
        assert!(config.include.is_empty());
    }
}
