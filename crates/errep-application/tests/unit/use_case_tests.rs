//! Tests for the submission use case
//!
//! Uses the real in-memory adapters from errep-providers plus local doubles
//! that fail on demand.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use errep_application::{
    CategorizationService, PublishPolicy, SubmitErrorReportUseCase, ValidationService,
};
use errep_domain::events::DomainEventStream;
use errep_domain::ports::{ErrorEventPublisher, ErrorReportRepository, PublishAck};
use errep_domain::value_objects::PERSISTENCE_FAILURE_DESCRIPTOR;
use errep_domain::{
    Error, ErrorCategory, ErrorCreated, ErrorReport, ReportId, Result, Severity,
    SubmissionRequest, SubmissionResponse,
};
use errep_providers::events::InMemoryEventPublisher;
use errep_providers::repository::InMemoryErrorReportRepository;

/// Publisher that fails its first `failures` calls
struct FlakyPublisher {
    failures: u32,
    attempts: AtomicU32,
}

impl FlakyPublisher {
    fn failing_first(failures: u32) -> Self {
        Self {
            failures,
            attempts: AtomicU32::new(0),
        }
    }

    fn always_failing() -> Self {
        Self::failing_first(u32::MAX)
    }

    fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ErrorEventPublisher for FlakyPublisher {
    async fn publish_error_created(&self, _event: ErrorCreated) -> Result<PublishAck> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt <= self.failures {
            Err(Error::publish("broker unavailable"))
        } else {
            Ok(PublishAck::new("flaky"))
        }
    }

    async fn subscribe_events(&self) -> Result<DomainEventStream> {
        Err(Error::publish("broker unavailable"))
    }

    fn provider_name(&self) -> &str {
        "flaky"
    }
}

/// Publisher that waits before recording the event
struct SlowPublisher {
    delay: Duration,
    inner: InMemoryEventPublisher,
}

#[async_trait]
impl ErrorEventPublisher for SlowPublisher {
    async fn publish_error_created(&self, event: ErrorCreated) -> Result<PublishAck> {
        tokio::time::sleep(self.delay).await;
        self.inner.publish_error_created(event).await
    }

    async fn subscribe_events(&self) -> Result<DomainEventStream> {
        self.inner.subscribe_events().await
    }

    fn provider_name(&self) -> &str {
        "slow"
    }
}

/// Repository whose storage is always down
struct FailingRepository;

#[async_trait]
impl ErrorReportRepository for FailingRepository {
    async fn save(&self, _report: &ErrorReport) -> Result<ReportId> {
        Err(Error::infrastructure(
            "connection refused: postgres://errep@db-internal:5432",
        ))
    }

    async fn get_by_id(&self, _id: &ReportId) -> Result<Option<ErrorReport>> {
        Ok(None)
    }

    async fn list_by_job(&self, _job_id: &str) -> Result<Vec<ErrorReport>> {
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

fn use_case(
    repository: Arc<dyn ErrorReportRepository>,
    publisher: Arc<dyn ErrorEventPublisher>,
) -> SubmitErrorReportUseCase {
    SubmitErrorReportUseCase::new(
        ValidationService::default(),
        CategorizationService::default(),
        repository,
        publisher,
    )
}

fn valid_request() -> SubmissionRequest {
    SubmissionRequest::new("j1", "s1", "teh cat", "the cat")
}

#[tokio::test]
async fn test_valid_submission_is_stored_and_announced() {
    let repository = Arc::new(InMemoryErrorReportRepository::new());
    let publisher = Arc::new(InMemoryEventPublisher::new());
    let use_case = use_case(repository.clone(), publisher.clone());

    let receipt = use_case.execute(valid_request()).await.expect("submission");

    assert!(receipt.publish_acknowledged);
    assert!(receipt.warnings.is_empty());
    assert_eq!(receipt.category, ErrorCategory::Spelling);

    let stored = repository
        .get_by_id(&receipt.report_id)
        .await
        .expect("lookup")
        .expect("stored report");
    assert_eq!(stored.job_id(), "j1");
    assert_eq!(stored.speaker_id(), "s1");
    assert_eq!(stored.original_text(), "teh cat");
    assert_eq!(stored.corrected_text(), "the cat");
    assert_eq!(stored.correlation_id(), receipt.correlation_id);

    let events = publisher.published().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].correlation_id, receipt.correlation_id);
    assert_eq!(events[0].report_id(), &receipt.report_id);
}

#[tokio::test]
async fn test_invalid_submission_is_neither_stored_nor_announced() {
    let repository = Arc::new(InMemoryErrorReportRepository::new());
    let publisher = Arc::new(InMemoryEventPublisher::new());
    let use_case = use_case(repository.clone(), publisher.clone());

    let err = use_case
        .execute(SubmissionRequest::new("", "s1", "", "x"))
        .await
        .expect_err("validation must fail");

    assert!(err.is_validation());
    assert!(err.violations().iter().any(|v| v == "job_id is required"));
    assert!(err.violations().iter().any(|v| v.contains("original_text")));
    assert!(repository.is_empty());
    assert!(publisher.published().await.is_empty());
}

#[tokio::test]
async fn test_identical_text_persists_and_publishes() {
    let repository = Arc::new(InMemoryErrorReportRepository::new());
    let publisher = Arc::new(InMemoryEventPublisher::new());
    let use_case = use_case(repository.clone(), publisher.clone());

    let receipt = use_case
        .execute(SubmissionRequest::new("j1", "s1", "same", "same"))
        .await
        .expect("no-op correction is accepted");

    assert_eq!(receipt.severity, Severity::Low);
    assert_eq!(receipt.category, ErrorCategory::NoChange);
    assert_eq!(repository.len(), 1);
    assert_eq!(publisher.published().await.len(), 1);
}

#[tokio::test]
async fn test_persistence_failure_is_fatal_and_generic() {
    let publisher = Arc::new(InMemoryEventPublisher::new());
    let use_case = use_case(Arc::new(FailingRepository), publisher.clone());

    let result = use_case.execute(valid_request()).await;
    let err = result.as_ref().expect_err("save must fail");
    assert!(err.is_persistence());
    assert!(publisher.published().await.is_empty());

    match SubmissionResponse::from_result(result) {
        SubmissionResponse::Failed { error } => {
            assert_eq!(error, PERSISTENCE_FAILURE_DESCRIPTOR);
            assert!(!error.contains("db-internal"));
        }
        other => panic!("expected failure response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_publish_failure_is_advisory_by_default() {
    let repository = Arc::new(InMemoryErrorReportRepository::new());
    let publisher = Arc::new(FlakyPublisher::always_failing());
    let use_case = use_case(repository.clone(), publisher.clone());

    let receipt = use_case
        .execute(valid_request())
        .await
        .expect("publish failure does not fail the submission");

    assert!(!receipt.publish_acknowledged);
    assert_eq!(receipt.warnings.len(), 1);
    assert_eq!(publisher.attempts(), 1);
    assert!(
        repository
            .get_by_id(&receipt.report_id)
            .await
            .expect("lookup")
            .is_some()
    );
}

#[tokio::test]
async fn test_strict_policy_reports_publish_error_but_keeps_record() {
    let repository = Arc::new(InMemoryErrorReportRepository::new());
    let publisher = Arc::new(FlakyPublisher::always_failing());
    let use_case =
        use_case(repository.clone(), publisher).with_publish_policy(PublishPolicy::strict());

    let err = use_case
        .execute(valid_request())
        .await
        .expect_err("strict policy surfaces the failure");

    assert!(err.is_publish());
    assert!(!err.is_persistence());
    let stored = repository.list_by_job("j1").await.expect("list");
    assert_eq!(stored.len(), 1);
    assert!(err.to_string().contains(stored[0].id().expect("id").as_str()));
}

#[tokio::test]
async fn test_publish_is_retried_per_policy() {
    let repository = Arc::new(InMemoryErrorReportRepository::new());
    let publisher = Arc::new(FlakyPublisher::failing_first(2));
    let policy = PublishPolicy::advisory().with_retries(2, Duration::from_millis(1));
    let use_case = use_case(repository.clone(), publisher.clone()).with_publish_policy(policy);

    let receipt = use_case.execute(valid_request()).await.expect("submission");

    assert!(receipt.publish_acknowledged);
    assert_eq!(publisher.attempts(), 3);
    assert_eq!(repository.len(), 1);
}

#[tokio::test]
async fn test_retries_are_bounded() {
    let publisher = Arc::new(FlakyPublisher::always_failing());
    let policy = PublishPolicy::advisory().with_retries(3, Duration::from_millis(1));
    let use_case = use_case(
        Arc::new(InMemoryErrorReportRepository::new()),
        publisher.clone(),
    )
    .with_publish_policy(policy);

    let receipt = use_case.execute(valid_request()).await.expect("submission");

    assert!(!receipt.publish_acknowledged);
    assert_eq!(publisher.attempts(), 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submissions_get_distinct_ids() {
    const N: usize = 64;
    let repository = Arc::new(InMemoryErrorReportRepository::new());
    let publisher = Arc::new(InMemoryEventPublisher::new());
    let use_case = Arc::new(use_case(repository.clone(), publisher.clone()));

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let use_case = Arc::clone(&use_case);
            tokio::spawn(async move {
                use_case
                    .execute(SubmissionRequest::new(
                        format!("job-{i}"),
                        "s1",
                        format!("original {i}"),
                        format!("corrected {i}"),
                    ))
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let receipt = handle.await.expect("join").expect("submission");
        ids.insert(receipt.report_id);
    }

    assert_eq!(ids.len(), N);
    assert_eq!(repository.len(), N);
    assert_eq!(publisher.published().await.len(), N);
}

#[tokio::test]
async fn test_abandoned_submission_still_publishes() {
    let repository = Arc::new(InMemoryErrorReportRepository::new());
    let recorder = InMemoryEventPublisher::new();
    let publisher = Arc::new(SlowPublisher {
        delay: Duration::from_millis(50),
        inner: recorder.clone(),
    });
    let use_case = use_case(repository.clone(), publisher);

    let outcome =
        tokio::time::timeout(Duration::from_millis(10), use_case.execute(valid_request())).await;
    assert!(outcome.is_err(), "caller gave up before publish finished");

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(repository.len(), 1);
    assert_eq!(recorder.published().await.len(), 1);
}

#[test]
fn test_use_case_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SubmitErrorReportUseCase>();
}
