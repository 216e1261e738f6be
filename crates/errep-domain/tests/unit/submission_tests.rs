//! Tests for submission DTOs

use errep_domain::value_objects::{
    PERSISTENCE_FAILURE_DESCRIPTOR, PUBLISH_FAILURE_DESCRIPTOR,
};
use errep_domain::{
    CorrelationId, Error, ErrorCategory, ReportId, Severity, SubmissionReceipt,
    SubmissionResponse,
};

fn receipt() -> SubmissionReceipt {
    SubmissionReceipt {
        report_id: ReportId::new("r-1"),
        correlation_id: CorrelationId::new(),
        severity: Severity::Medium,
        category: ErrorCategory::Spelling,
        publish_acknowledged: true,
        warnings: Vec::new(),
    }
}

#[test]
fn test_accepted_response() {
    let response = SubmissionResponse::from_result(Ok(receipt()));
    assert!(response.is_accepted());
}

#[test]
fn test_validation_error_maps_to_rejected_in_order() {
    let violations = vec!["job_id is required".to_string(), "original_text is required".to_string()];
    let response = SubmissionResponse::from_result(Err(Error::validation(violations.clone())));

    assert_eq!(response, SubmissionResponse::Rejected { violations });
}

#[test]
fn test_persistence_error_is_reported_generically() {
    let response = SubmissionResponse::from_result(Err(Error::persistence(
        "disk /var/lib/errep/tmp-1234 is full",
    )));

    match response {
        SubmissionResponse::Failed { error } => {
            assert_eq!(error, PERSISTENCE_FAILURE_DESCRIPTOR);
            assert!(!error.contains("/var/lib"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn test_publish_error_is_distinct_from_persistence_error() {
    let response = SubmissionResponse::from_result(Err(Error::publish("broker down")));
    assert_eq!(
        response,
        SubmissionResponse::Failed {
            error: PUBLISH_FAILURE_DESCRIPTOR.to_string()
        }
    );
}

#[test]
fn test_response_json_shape() {
    let json = serde_json::to_value(SubmissionResponse::from_result(Ok(receipt())))
        .expect("serialize");

    assert_eq!(json["status"], "accepted");
    assert_eq!(json["severity"], "MEDIUM");
    assert_eq!(json["category"], "spelling");
}
