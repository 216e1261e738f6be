//! Configuration
//!
//! Layered configuration loaded with figment: defaults, then a TOML file,
//! then `ERREP__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AdaptersConfig, AppConfig, EventPublisherConfig, LoggingConfig, RepositoryConfig,
    SubmissionConfig, ValidationConfig,
};
