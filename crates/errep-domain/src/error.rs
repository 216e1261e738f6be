//! Error handling types

use crate::entities::ReportStatus;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by infrastructure-facing variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for errep
///
/// The variants mirror the submission error taxonomy: validation and
/// configuration errors are precise and enumerable, persistence and
/// infrastructure errors describe adapter faults, and publish errors are
/// kept apart so they are never mistaken for a failed save.
#[derive(Error, Debug)]
pub enum Error {
    /// One or more validation rules rejected the report
    #[error("Validation failed: {}", violations.join("; "))]
    Validation {
        /// Violation messages in rule evaluation order
        violations: Vec<String>,
    },

    /// Repository adapter failed to store a report
    #[error("Persistence error: {message}")]
    Persistence {
        /// Description of the persistence failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Event publisher adapter failed to announce an event
    #[error("Publish error: {message}")]
    Publish {
        /// Description of the publish failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Infrastructure fault on a read path (connectivity, corruption)
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Illegal lifecycle transition on an error report
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// Status the report was in
        from: ReportStatus,
        /// Status that was requested
        to: ReportStatus,
    },

    /// Attempt to change the content of a persisted report
    #[error("Report {report_id} is persisted and cannot be modified")]
    ImmutableReport {
        /// Identifier of the persisted report
        report_id: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Taxonomy constructors
impl Error {
    /// Create a validation error from ordered violation messages
    pub fn validation(violations: Vec<String>) -> Self {
        Self::Validation { violations }
    }

    /// Create a persistence error
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        Self::Persistence {
            message: message.into(),
            source: None,
        }
    }

    /// Create a persistence error with source
    pub fn persistence_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Persistence {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a publish error
    pub fn publish<S: Into<String>>(message: S) -> Self {
        Self::Publish {
            message: message.into(),
            source: None,
        }
    }

    /// Create a publish error with source
    pub fn publish_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Publish {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification helpers
impl Error {
    /// Whether this error is a validation rejection
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Whether this error is a persistence failure
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }

    /// Whether this error is a publish failure
    pub fn is_publish(&self) -> bool {
        matches!(self, Self::Publish { .. })
    }

    /// Whether this error is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Violation messages for validation errors, empty otherwise
    pub fn violations(&self) -> &[String] {
        match self {
            Self::Validation { violations } => violations,
            _ => &[],
        }
    }
}
