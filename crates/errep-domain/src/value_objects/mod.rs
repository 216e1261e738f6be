//! Value Objects
//!
//! Immutable values without identity: identifiers, classification results,
//! validation outcomes and the submission DTOs.

/// Severity, category and classification types
pub mod classification;
/// Report and correlation identifiers
pub mod ids;
/// Submission request/response DTOs
pub mod submission;
/// Aggregated validation outcome
pub mod validation;

pub use classification::{Classification, ErrorCategory, Severity};
pub use ids::{CorrelationId, ReportId};
pub use submission::{
    INTERNAL_FAILURE_DESCRIPTOR, PERSISTENCE_FAILURE_DESCRIPTOR, PUBLISH_FAILURE_DESCRIPTOR,
    SubmissionReceipt, SubmissionRequest, SubmissionResponse,
};
pub use validation::ValidationResult;
