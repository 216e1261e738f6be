//! Error report entity
//!
//! An [`ErrorReport`] is created in memory at submission time and moves
//! through a small lifecycle:
//!
//! ```text
//! PENDING ──► VALIDATED ──► PERSISTED
//!    │            │
//!    └────────────┴──► FAILED
//! ```
//!
//! Construction never rejects input. Empty identifiers or text flow into the
//! validation pipeline so the caller gets every violation at once. Once a
//! report is PERSISTED its content is frozen; a correction is a new report.

use crate::error::{Error, Result};
use crate::value_objects::{
    Classification, CorrelationId, ErrorCategory, ReportId, Severity, SubmissionRequest,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an error report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    /// Created, not yet validated
    #[default]
    Pending,
    /// Passed every validation rule
    Validated,
    /// Stored by a repository adapter
    Persisted,
    /// Rejected by validation or storage
    Failed,
}

impl ReportStatus {
    /// Whether moving from `self` to `next` is a legal lifecycle step
    pub fn can_transition_to(self, next: ReportStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Validated)
                | (Self::Validated, Self::Persisted)
                | (Self::Pending | Self::Validated, Self::Failed)
        )
    }

    /// Whether no further transitions are possible
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Persisted | Self::Failed)
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "PENDING",
            Self::Validated => "VALIDATED",
            Self::Persisted => "PERSISTED",
            Self::Failed => "FAILED",
        };
        f.write_str(name)
    }
}

/// An observed transcription error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    id: Option<ReportId>,
    job_id: String,
    speaker_id: String,
    original_text: String,
    corrected_text: String,
    severity: Severity,
    category: ErrorCategory,
    status: ReportStatus,
    created_at: DateTime<Utc>,
    correlation_id: CorrelationId,
}

impl ErrorReport {
    /// Create a pending report from raw submission fields
    ///
    /// A fresh correlation identifier and creation timestamp are assigned
    /// here, exactly once. Severity and category start at their lowest
    /// values until categorization runs.
    pub fn new(
        job_id: impl Into<String>,
        speaker_id: impl Into<String>,
        original_text: impl Into<String>,
        corrected_text: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            job_id: job_id.into(),
            speaker_id: speaker_id.into(),
            original_text: original_text.into(),
            corrected_text: corrected_text.into(),
            severity: Severity::default(),
            category: ErrorCategory::default(),
            status: ReportStatus::Pending,
            created_at: Utc::now(),
            correlation_id: CorrelationId::new(),
        }
    }

    /// Create a pending report from a submission request
    pub fn from_request(request: &SubmissionRequest) -> Self {
        Self::new(
            request.job_id.as_str(),
            request.speaker_id.as_str(),
            request.original_text.as_str(),
            request.corrected_text.as_str(),
        )
    }

    /// Storage-assigned identifier, absent before persistence
    pub fn id(&self) -> Option<&ReportId> {
        self.id.as_ref()
    }

    /// Transcription job identifier
    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    /// Speaker identifier
    pub fn speaker_id(&self) -> &str {
        &self.speaker_id
    }

    /// Text as transcribed
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Text as corrected by the submitter
    pub fn corrected_text(&self) -> &str {
        &self.corrected_text
    }

    /// Assigned severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Assigned category
    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Severity and category together
    pub fn classification(&self) -> Classification {
        Classification::new(self.severity, self.category)
    }

    /// Current lifecycle status
    pub fn status(&self) -> ReportStatus {
        self.status
    }

    /// Creation timestamp (UTC)
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Correlation identifier shared with the creation event
    pub fn correlation_id(&self) -> CorrelationId {
        self.correlation_id
    }

    /// Whether the report has been stored
    pub fn is_persisted(&self) -> bool {
        self.status == ReportStatus::Persisted
    }

    /// Compare the stored content of two reports, ignoring identifier and status
    pub fn same_content(&self, other: &Self) -> bool {
        self.job_id == other.job_id
            && self.speaker_id == other.speaker_id
            && self.original_text == other.original_text
            && self.corrected_text == other.corrected_text
            && self.severity == other.severity
            && self.category == other.category
            && self.created_at == other.created_at
            && self.correlation_id == other.correlation_id
    }

    /// PENDING → VALIDATED
    pub fn mark_validated(&mut self) -> Result<()> {
        self.transition(ReportStatus::Validated)
    }

    /// Apply a categorization result
    pub fn classify(&mut self, classification: Classification) -> Result<()> {
        self.ensure_mutable()?;
        self.severity = classification.severity;
        self.category = classification.category;
        Ok(())
    }

    /// VALIDATED → PERSISTED, recording the storage-assigned identifier
    ///
    /// Only repository adapters call this, on their own copy of the report.
    pub fn mark_persisted(&mut self, id: ReportId) -> Result<()> {
        self.ensure_mutable()?;
        self.transition(ReportStatus::Persisted)?;
        self.id = Some(id);
        Ok(())
    }

    /// Copy of this report as a repository stores it under `id`
    ///
    /// Shared by every repository adapter so they all accept and reject
    /// exactly the same inputs.
    pub fn persisted_copy(&self, id: ReportId) -> Result<Self> {
        let mut stored = self.clone();
        stored.mark_persisted(id)?;
        Ok(stored)
    }

    /// PENDING | VALIDATED → FAILED
    pub fn mark_failed(&mut self) -> Result<()> {
        self.transition(ReportStatus::Failed)
    }

    fn ensure_mutable(&self) -> Result<()> {
        match &self.id {
            Some(id) => Err(Error::ImmutableReport {
                report_id: id.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn transition(&mut self, next: ReportStatus) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(Error::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}
