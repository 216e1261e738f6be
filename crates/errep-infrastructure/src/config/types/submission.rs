//! Validation limits and submission policy configuration

use crate::constants::DEFAULT_PUBLISH_RETRY_BACKOFF_MS;
use errep_application::domain_services::{
    DEFAULT_MAX_IDENTIFIER_LENGTH, DEFAULT_MAX_TEXT_LENGTH, ValidationLimits,
};
use errep_application::use_cases::{PublishFailureMode, PublishPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Limits enforced by the built-in validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum job/speaker identifier length (characters)
    pub max_identifier_length: usize,
    /// Maximum original/corrected text length (characters)
    pub max_text_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_identifier_length: DEFAULT_MAX_IDENTIFIER_LENGTH,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

impl From<ValidationConfig> for ValidationLimits {
    fn from(config: ValidationConfig) -> Self {
        Self {
            max_identifier_length: config.max_identifier_length,
            max_text_length: config.max_text_length,
        }
    }
}

/// How the submission use case treats publish failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// `advisory` (default) or `strict`
    pub publish_failure_policy: PublishFailureMode,
    /// Extra publish attempts after the first failure
    pub publish_retries: u32,
    /// Backoff unit between attempts (milliseconds)
    pub publish_retry_backoff_ms: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            publish_failure_policy: PublishFailureMode::Advisory,
            publish_retries: 0,
            publish_retry_backoff_ms: DEFAULT_PUBLISH_RETRY_BACKOFF_MS,
        }
    }
}

impl From<SubmissionConfig> for PublishPolicy {
    fn from(config: SubmissionConfig) -> Self {
        Self {
            failure_mode: config.publish_failure_policy,
            retries: config.publish_retries,
            retry_backoff: Duration::from_millis(config.publish_retry_backoff_ms),
        }
    }
}
