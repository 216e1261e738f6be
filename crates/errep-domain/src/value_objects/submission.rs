//! Submission request and response DTOs

use crate::error::{Error, Result};
use crate::value_objects::classification::{ErrorCategory, Severity};
use crate::value_objects::ids::{CorrelationId, ReportId};
use serde::{Deserialize, Serialize};

/// Generic descriptor returned when storage fails; adapter detail stays in logs
pub const PERSISTENCE_FAILURE_DESCRIPTOR: &str = "the report could not be stored";

/// Descriptor returned when a strict publish policy rejects a stored report
pub const PUBLISH_FAILURE_DESCRIPTOR: &str = "the report was stored but could not be announced";

/// Descriptor for any other unexpected failure
pub const INTERNAL_FAILURE_DESCRIPTOR: &str = "internal error";

/// Raw submission of an observed transcription error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// Transcription job the error was observed in
    pub job_id: String,
    /// Speaker whose utterance was mis-transcribed
    pub speaker_id: String,
    /// Text as transcribed
    pub original_text: String,
    /// Text as it should have been transcribed
    pub corrected_text: String,
}

impl SubmissionRequest {
    /// Create a request from its four fields
    pub fn new(
        job_id: impl Into<String>,
        speaker_id: impl Into<String>,
        original_text: impl Into<String>,
        corrected_text: impl Into<String>,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            speaker_id: speaker_id.into(),
            original_text: original_text.into(),
            corrected_text: corrected_text.into(),
        }
    }
}

/// Successful submission outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Identifier assigned by the repository
    pub report_id: ReportId,
    /// Correlation identifier shared with the published event
    pub correlation_id: CorrelationId,
    /// Assigned severity
    pub severity: Severity,
    /// Assigned category
    pub category: ErrorCategory,
    /// Whether the publisher acknowledged the creation event
    pub publish_acknowledged: bool,
    /// Advisory warnings (e.g. a failed publish)
    pub warnings: Vec<String>,
}

/// Caller-facing response for a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionResponse {
    /// The report was stored
    Accepted(SubmissionReceipt),
    /// Validation rejected the report
    Rejected {
        /// Ordered violation messages
        violations: Vec<String>,
    },
    /// Submission failed for a non-validation reason
    Failed {
        /// Generic error descriptor
        error: String,
    },
}

impl SubmissionResponse {
    /// Map a use case result to the caller-facing response
    pub fn from_result(result: Result<SubmissionReceipt>) -> Self {
        match result {
            Ok(receipt) => Self::Accepted(receipt),
            Err(Error::Validation { violations }) => Self::Rejected { violations },
            Err(Error::Persistence { .. }) => Self::Failed {
                error: PERSISTENCE_FAILURE_DESCRIPTOR.to_string(),
            },
            Err(Error::Publish { .. }) => Self::Failed {
                error: PUBLISH_FAILURE_DESCRIPTOR.to_string(),
            },
            Err(_) => Self::Failed {
                error: INTERNAL_FAILURE_DESCRIPTOR.to_string(),
            },
        }
    }

    /// Whether the submission was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}
