//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::adapters::{AdaptersConfig, EventPublisherConfig, RepositoryConfig};
pub use super::logging::LoggingConfig;
pub use super::submission::{SubmissionConfig, ValidationConfig};

/// Root configuration of an errep process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Adapter selection
    pub adapters: AdaptersConfig,
    /// Validation limits
    pub validation: ValidationConfig,
    /// Submission policy
    pub submission: SubmissionConfig,
}
