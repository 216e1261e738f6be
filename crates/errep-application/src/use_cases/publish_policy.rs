//! Publish failure policy
//!
//! A failed publish never rolls back a save. The policy only decides how
//! hard the use case tries to publish and whether a final failure is
//! reported as an advisory warning or as an error.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What a publish failure means for the submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PublishFailureMode {
    /// Submission succeeds with `publish_acknowledged = false` and a warning
    #[default]
    Advisory,
    /// Submission returns a publish error; the stored record is kept
    Strict,
}

/// Retry and failure handling for event publishing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishPolicy {
    /// Outcome once all attempts have failed
    pub failure_mode: PublishFailureMode,
    /// Additional attempts after the first failure
    pub retries: u32,
    /// Backoff unit; attempt `n` waits `n * retry_backoff` before retrying
    pub retry_backoff: Duration,
}

impl PublishPolicy {
    /// Advisory policy without retries
    pub fn advisory() -> Self {
        Self::default()
    }

    /// Strict policy without retries
    pub fn strict() -> Self {
        Self {
            failure_mode: PublishFailureMode::Strict,
            ..Self::default()
        }
    }

    /// Retry a failed publish `retries` more times
    pub fn with_retries(mut self, retries: u32, retry_backoff: Duration) -> Self {
        self.retries = retries;
        self.retry_backoff = retry_backoff;
        self
    }

    /// Total number of publish attempts
    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }

    /// Delay before retrying after failed attempt number `attempt` (1-based)
    pub fn backoff_after(&self, attempt: u32) -> Duration {
        self.retry_backoff.saturating_mul(attempt)
    }
}

impl Default for PublishPolicy {
    fn default() -> Self {
        Self {
            failure_mode: PublishFailureMode::Advisory,
            retries: 0,
            retry_backoff: Duration::from_millis(100),
        }
    }
}
