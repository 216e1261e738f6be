//! Use Cases
//!
//! Application operations orchestrating domain services and ports.

pub mod publish_policy;
pub mod submit_error_report;

pub use publish_policy::{PublishFailureMode, PublishPolicy};
pub use submit_error_report::{SubmissionStage, SubmitErrorReportUseCase};
