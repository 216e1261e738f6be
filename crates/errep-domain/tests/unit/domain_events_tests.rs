//! Tests for domain events

use errep_domain::{DomainEvent, ErrorCreated, ErrorReport, ReportId};

#[test]
fn test_error_created_snapshots_report() {
    let report = ErrorReport::new("j1", "s1", "teh cat", "the cat");
    let event = ErrorCreated::for_report(&report, ReportId::new("r-1")).expect("event");

    assert_eq!(event.correlation_id, report.correlation_id());
    assert_eq!(event.created_at, report.created_at());
    assert_eq!(event.report_id(), &ReportId::new("r-1"));
    assert_eq!(event.report.original_text, "teh cat");
    assert_eq!(event.report.corrected_text, "the cat");
}

#[test]
fn test_error_created_rejects_mismatched_identifier() {
    let mut report = ErrorReport::new("j1", "s1", "a", "b");
    report.mark_validated().expect("validate");
    let stored = report.persisted_copy(ReportId::new("r-1")).expect("store");

    assert!(ErrorCreated::for_report(&stored, ReportId::new("r-2")).is_err());
    assert!(ErrorCreated::for_report(&stored, ReportId::new("r-1")).is_ok());
}

#[test]
fn test_domain_event_is_tagged_json() {
    let report = ErrorReport::new("j1", "s1", "a", "b");
    let event: DomainEvent = ErrorCreated::for_report(&report, ReportId::new("r-1"))
        .expect("event")
        .into();

    let json = serde_json::to_value(&event).expect("serialize");
    assert_eq!(json["type"], "error_created");
    assert_eq!(json["report"]["report_id"], "r-1");

    let decoded: DomainEvent = serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded.correlation_id(), report.correlation_id());
}
