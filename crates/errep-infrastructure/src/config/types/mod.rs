//! Configuration types

pub mod adapters;
pub mod app;
pub mod logging;
pub mod submission;

pub use app::{
    AdaptersConfig, AppConfig, EventPublisherConfig, LoggingConfig, RepositoryConfig,
    SubmissionConfig, ValidationConfig,
};
