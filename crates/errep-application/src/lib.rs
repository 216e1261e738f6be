//! # errep Application Layer
//!
//! Business logic of the error-report submission service:
//!
//! - [`domain_services`]: the validation pipeline and categorization
//! - [`use_cases`]: [`SubmitErrorReportUseCase`] and its publish policy
//! - [`ports`]: port re-exports and the linkme-backed adapter registry
//!
//! Concrete adapters live in `errep-providers` and register themselves into
//! the registry slices declared here.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::{CategorizationService, ValidationLimits, ValidationService};
pub use ports::registry::{AdapterRegistry, PortKind};
pub use use_cases::{PublishFailureMode, PublishPolicy, SubmitErrorReportUseCase};
