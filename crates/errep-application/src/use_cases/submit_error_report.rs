//! Submit Error Report Use Case
//!
//! The single externally visible operation of errep. Each call walks the
//! submission state machine:
//!
//! ```text
//! PENDING → VALIDATING → INVALID                         (terminal, rejected)
//!                      → VALID → PERSISTING → PERSIST_FAILED   (terminal, failed)
//!                                           → PERSISTED → PUBLISHING → DONE
//!                                                                    → PUBLISH_FAILED
//! ```
//!
//! Persistence failures are fatal to the submission. Publish failures are
//! not: the repository is the record of truth, so a stored report is never
//! rolled back because its event could not be announced. See
//! [`PublishPolicy`] for how a publish failure is surfaced.

use crate::domain_services::{CategorizationService, ValidationService};
use crate::use_cases::publish_policy::{PublishFailureMode, PublishPolicy};
use errep_domain::ports::{ErrorEventPublisher, ErrorReportRepository, PublishAck};
use errep_domain::{
    Error, ErrorCreated, ErrorReport, ReportId, Result, SubmissionReceipt, SubmissionRequest,
};
use std::fmt;
use std::sync::Arc;
use tracing::{Instrument, debug, error, info, info_span, warn};

/// States of a single submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionStage {
    /// Request received
    Pending,
    /// Rules are being evaluated
    Validating,
    /// At least one rule failed
    Invalid,
    /// Every rule passed
    Valid,
    /// Waiting on the repository
    Persisting,
    /// Repository reported a fault
    PersistFailed,
    /// Repository assigned an identifier
    Persisted,
    /// Waiting on the publisher
    Publishing,
    /// Publisher acknowledged the event
    Done,
    /// Publisher failed after all attempts
    PublishFailed,
}

impl SubmissionStage {
    /// Stable name used in log fields
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Validating => "VALIDATING",
            Self::Invalid => "INVALID",
            Self::Valid => "VALID",
            Self::Persisting => "PERSISTING",
            Self::PersistFailed => "PERSIST_FAILED",
            Self::Persisted => "PERSISTED",
            Self::Publishing => "PUBLISHING",
            Self::Done => "DONE",
            Self::PublishFailed => "PUBLISH_FAILED",
        }
    }
}

impl fmt::Display for SubmissionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validates, classifies, stores and announces error reports
///
/// Holds no per-submission state; one instance serves any number of
/// concurrent `execute` calls sharing the injected adapters.
#[derive(Clone)]
pub struct SubmitErrorReportUseCase {
    validation: ValidationService,
    categorization: CategorizationService,
    repository: Arc<dyn ErrorReportRepository>,
    publisher: Arc<dyn ErrorEventPublisher>,
    publish_policy: PublishPolicy,
}

impl SubmitErrorReportUseCase {
    /// Create the use case with injected services and adapters
    pub fn new(
        validation: ValidationService,
        categorization: CategorizationService,
        repository: Arc<dyn ErrorReportRepository>,
        publisher: Arc<dyn ErrorEventPublisher>,
    ) -> Self {
        Self {
            validation,
            categorization,
            repository,
            publisher,
            publish_policy: PublishPolicy::default(),
        }
    }

    /// Replace the publish failure policy
    pub fn with_publish_policy(mut self, policy: PublishPolicy) -> Self {
        self.publish_policy = policy;
        self
    }

    /// The active publish failure policy
    pub fn publish_policy(&self) -> &PublishPolicy {
        &self.publish_policy
    }

    /// Submit an error report
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] with every violation, in rule order
    /// - [`Error::Persistence`] when the repository fails; nothing is published
    /// - [`Error::Publish`] only under [`PublishFailureMode::Strict`]
    pub async fn execute(&self, request: SubmissionRequest) -> Result<SubmissionReceipt> {
        let report = ErrorReport::from_request(&request);
        let span = info_span!(
            "submit_error_report",
            correlation_id = %report.correlation_id(),
            job_id = %report.job_id(),
        );
        self.run(report).instrument(span).await
    }

    async fn run(&self, mut report: ErrorReport) -> Result<SubmissionReceipt> {
        debug!(stage = %SubmissionStage::Pending, "Submission received");

        debug!(stage = %SubmissionStage::Validating, "Validating report");
        let validation = self.validation.validate(&report);
        if !validation.is_valid() {
            report.mark_failed()?;
            warn!(
                stage = %SubmissionStage::Invalid,
                violations = validation.violations().len(),
                "Report rejected by validation"
            );
            return Err(Error::validation(validation.into_violations()));
        }
        report.mark_validated()?;

        let classification = self.categorization.classify(&report);
        report.classify(classification)?;
        debug!(
            stage = %SubmissionStage::Valid,
            severity = %classification.severity,
            category = %classification.category,
            "Report classified"
        );

        debug!(
            stage = %SubmissionStage::Persisting,
            provider = self.repository.provider_name(),
            "Saving report"
        );
        let report_id = match self.repository.save(&report).await {
            Ok(id) => id,
            Err(e) => {
                report.mark_failed()?;
                error!(
                    stage = %SubmissionStage::PersistFailed,
                    provider = self.repository.provider_name(),
                    error = %e,
                    "Failed to persist report"
                );
                return Err(into_persistence_error(e));
            }
        };
        info!(
            stage = %SubmissionStage::Persisted,
            report_id = %report_id,
            "Report persisted"
        );

        let event = ErrorCreated::for_report(&report, report_id.clone())?;
        debug!(
            stage = %SubmissionStage::Publishing,
            provider = self.publisher.provider_name(),
            "Publishing ErrorCreated"
        );
        let mut warnings = Vec::new();
        let publish_acknowledged = match self.publish(event).await {
            Ok(ack) => {
                info!(
                    stage = %SubmissionStage::Done,
                    provider = %ack.provider,
                    "ErrorCreated acknowledged"
                );
                true
            }
            Err(e) => {
                warn!(
                    stage = %SubmissionStage::PublishFailed,
                    report_id = %report_id,
                    error = %e,
                    "ErrorCreated was not acknowledged"
                );
                if self.publish_policy.failure_mode == PublishFailureMode::Strict {
                    return Err(strict_publish_error(&report_id, e));
                }
                warnings.push(format!(
                    "report {report_id} was stored but its ErrorCreated event was not acknowledged"
                ));
                false
            }
        };

        Ok(SubmissionReceipt {
            report_id,
            correlation_id: report.correlation_id(),
            severity: report.severity(),
            category: report.category(),
            publish_acknowledged,
            warnings,
        })
    }

    /// Publish on a detached task so an abandoned submission still announces
    /// the report it already stored
    async fn publish(&self, event: ErrorCreated) -> Result<PublishAck> {
        let publisher = Arc::clone(&self.publisher);
        let policy = self.publish_policy;
        let task = tokio::spawn(
            async move { publish_with_retries(publisher.as_ref(), event, policy).await }
                .in_current_span(),
        );
        match task.await {
            Ok(result) => result,
            Err(e) => Err(Error::publish_with_source("publish task did not complete", e)),
        }
    }
}

impl fmt::Debug for SubmitErrorReportUseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitErrorReportUseCase")
            .field("validation", &self.validation)
            .field("repository", &self.repository.provider_name())
            .field("publisher", &self.publisher.provider_name())
            .field("publish_policy", &self.publish_policy)
            .finish()
    }
}

async fn publish_with_retries(
    publisher: &dyn ErrorEventPublisher,
    event: ErrorCreated,
    policy: PublishPolicy,
) -> Result<PublishAck> {
    let attempts = policy.max_attempts();
    let mut attempt = 1;
    loop {
        match publisher.publish_error_created(event.clone()).await {
            Ok(ack) => return Ok(ack),
            Err(e) if attempt < attempts => {
                let delay = policy.backoff_after(attempt);
                warn!(
                    attempt,
                    attempts,
                    retry_in_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %e,
                    "Publish attempt failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(into_publish_error(e)),
        }
    }
}

fn into_persistence_error(e: Error) -> Error {
    if e.is_persistence() {
        e
    } else {
        Error::persistence_with_source("repository failed to store the report", e)
    }
}

fn into_publish_error(e: Error) -> Error {
    if e.is_publish() {
        e
    } else {
        Error::publish_with_source("publisher failed to announce the report", e)
    }
}

fn strict_publish_error(report_id: &ReportId, e: Error) -> Error {
    Error::publish_with_source(
        format!("report {report_id} was stored but its ErrorCreated event was not acknowledged"),
        e,
    )
}
