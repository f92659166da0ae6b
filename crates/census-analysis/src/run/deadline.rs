//! Run-scoped deadline shared across repository scans.

use std::time::{Duration, Instant};

/// Monotonic deadline; a `None` limit means unbounded.
///
/// Shared by reference across walker and extraction workers; repositories
/// check it independently, so one slow scan never blocks another's barrier.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    pub fn start(limit: Option<Duration>) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    pub fn unbounded() -> Self {
        Self::start(None)
    }

    pub fn expired(&self) -> bool {
        self.limit
            .map(|limit| self.started.elapsed() >= limit)
            .unwrap_or(false)
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_never_expires() {
        assert!(!Deadline::unbounded().expired());
    }

    #[test]
    fn zero_limit_expires_immediately() {
        assert!(Deadline::start(Some(Duration::ZERO)).expired());
    }
}
