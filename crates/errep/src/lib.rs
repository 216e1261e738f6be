//! # errep
//!
//! Error report submission service for transcription corrections. A
//! submission is validated, classified by severity and category, stored
//! through the configured repository and announced as an `ErrorCreated`
//! event through the configured publisher.
//!
//! ## Example
//!
//! ```ignore
//! use errep::infrastructure::{AppConfig, AppContext};
//! use errep::{SubmissionRequest, SubmissionResponse};
//!
//! let context = AppContext::init(AppConfig::default())?;
//! let response = context
//!     .submit(SubmissionRequest::new("job-42", "speaker-1", "teh cat", "the cat"))
//!     .await;
//! assert!(response.is_accepted());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entity, value objects, events, error taxonomy and ports
//! - `application` - validation, categorization, the submission use case and the adapter registry
//! - `infrastructure` - configuration, logging and the composition root
//! - `cli` - the `errep` command line

// Force-link errep-providers so its linkme registrations are present
extern crate errep_providers;

pub mod cli;

/// Domain layer - core business types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use errep_domain::*;
}

/// Application layer - use case, domain services and adapter registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use errep_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use errep_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;
