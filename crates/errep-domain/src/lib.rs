//! # errep Domain Layer
//!
//! Core types of the error-report submission service: the [`ErrorReport`]
//! entity and its lifecycle, value objects for classification and
//! validation, the `ErrorCreated` event, the error taxonomy and the port
//! traits storage and messaging adapters implement.
//!
//! This crate performs no I/O.

/// Domain entities
pub mod entities;
/// Error taxonomy
pub mod error;
/// Domain events
pub mod events;
/// Port traits
pub mod ports;
/// Value objects
pub mod value_objects;

pub use entities::{ErrorReport, ReportStatus};
pub use error::{Error, Result};
pub use events::{DomainEvent, ErrorCreated, ReportSnapshot};
pub use value_objects::{
    Classification, CorrelationId, ErrorCategory, ReportId, Severity, SubmissionReceipt,
    SubmissionRequest, SubmissionResponse, ValidationResult,
};
