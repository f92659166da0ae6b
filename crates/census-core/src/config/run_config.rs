//! Run-level configuration.

use serde::{Deserialize, Serialize};

use super::walk_config::WalkConfig;

/// Policy applied when the run deadline fires while repository scans are
/// still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeoutPolicy {
    /// Abort the run; no document is published.
    #[default]
    Abort,
    /// Record unfinished repositories as inconclusive (excluded from every
    /// denominator) and complete the run without them.
    Degrade,
}

/// Configuration for one engine run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunConfig {
    /// Adoption fraction at which a recommended variant counts as dominant.
    /// Default: 0.60.
    pub dominance_threshold: Option<f64>,
    /// Run-scoped deadline in milliseconds. None = unbounded.
    pub timeout_ms: Option<u64>,
    pub timeout_policy: Option<TimeoutPolicy>,
    pub walk: WalkConfig,
}

impl RunConfig {
    pub fn effective_dominance_threshold(&self) -> f64 {
        self.dominance_threshold.unwrap_or(0.60)
    }

    pub fn effective_timeout_policy(&self) -> TimeoutPolicy {
        self.timeout_policy.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_abort() {
        let config = RunConfig::default();
        assert_eq!(config.effective_timeout_policy(), TimeoutPolicy::Abort);
        assert_eq!(config.effective_dominance_threshold(), 0.60);
        assert!(config.timeout_ms.is_none());
    }

    #[test]
    fn policy_parses_kebab_case() {
        let config: RunConfig = toml::from_str("timeout_policy = \"degrade\"").unwrap();
        assert_eq!(config.effective_timeout_policy(), TimeoutPolicy::Degrade);
    }
}
