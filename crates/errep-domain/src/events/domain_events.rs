//! Domain events announced to downstream consumers

use crate::entities::ErrorReport;
use crate::error::{Error, Result};
use crate::value_objects::{CorrelationId, ErrorCategory, ReportId, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of a persisted report's public fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    /// Identifier assigned by the repository
    pub report_id: ReportId,
    /// Transcription job identifier
    pub job_id: String,
    /// Speaker identifier
    pub speaker_id: String,
    /// Text as transcribed
    pub original_text: String,
    /// Text as corrected
    pub corrected_text: String,
    /// Assigned severity
    pub severity: Severity,
    /// Assigned category
    pub category: ErrorCategory,
}

/// Announces that an error report was persisted
///
/// Built by the submission use case right after a successful save and moved
/// into the publisher; the core keeps no reference to it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCreated {
    /// Correlation identifier of the persisted report
    pub correlation_id: CorrelationId,
    /// Report creation timestamp
    pub created_at: DateTime<Utc>,
    /// Snapshot of the persisted report
    pub report: ReportSnapshot,
}

impl ErrorCreated {
    /// Build the event for `report` using the identifier the repository assigned
    ///
    /// The report itself is the in-memory submission copy, so the identifier
    /// is passed explicitly rather than read from it.
    pub fn for_report(report: &ErrorReport, report_id: ReportId) -> Result<Self> {
        if let Some(existing) = report.id() {
            if existing != &report_id {
                return Err(Error::infrastructure(format!(
                    "report already carries identifier {existing}, cannot announce it as {report_id}"
                )));
            }
        }
        Ok(Self {
            correlation_id: report.correlation_id(),
            created_at: report.created_at(),
            report: ReportSnapshot {
                report_id,
                job_id: report.job_id().to_string(),
                speaker_id: report.speaker_id().to_string(),
                original_text: report.original_text().to_string(),
                corrected_text: report.corrected_text().to_string(),
                severity: report.severity(),
                category: report.category(),
            },
        })
    }

    /// Identifier of the announced report
    pub fn report_id(&self) -> &ReportId {
        &self.report.report_id
    }
}

/// Events published by errep
///
/// Subscribers receive this envelope so new event kinds can be added without
/// breaking existing consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// An error report was created and persisted
    ErrorCreated(ErrorCreated),
}

impl DomainEvent {
    /// Correlation identifier carried by the event
    pub fn correlation_id(&self) -> CorrelationId {
        match self {
            Self::ErrorCreated(event) => event.correlation_id,
        }
    }
}

impl From<ErrorCreated> for DomainEvent {
    fn from(event: ErrorCreated) -> Self {
        Self::ErrorCreated(event)
    }
}
