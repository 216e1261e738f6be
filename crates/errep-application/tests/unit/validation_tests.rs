//! Tests for the validation pipeline

use errep_application::domain_services::{
    FnRule, ValidationLimits, ValidationService, default_rules,
};
use errep_domain::ErrorReport;

#[test]
fn test_valid_report_has_no_violations() {
    let report = ErrorReport::new("j1", "s1", "teh cat", "the cat");
    let result = ValidationService::default().validate(&report);

    assert!(result.is_valid());
    assert!(result.violations().is_empty());
}

#[test]
fn test_missing_job_and_original_text_yield_two_messages() {
    let report = ErrorReport::new("", "s1", "", "x");
    let result = ValidationService::default().validate(&report);

    assert!(!result.is_valid());
    assert_eq!(
        result.violations(),
        ["job_id is required", "original_text is required"]
    );
}

#[test]
fn test_every_required_field_is_reported() {
    let report = ErrorReport::new("", "", "", "");
    let result = ValidationService::default().validate(&report);

    assert_eq!(result.violations().len(), 3);
    assert!(
        result
            .violations()
            .iter()
            .any(|v| v == "speaker_id is required")
    );
}

#[test]
fn test_empty_corrected_text_is_accepted() {
    let report = ErrorReport::new("j1", "s1", "an extra word", "");
    assert!(ValidationService::default().validate(&report).is_valid());
}

#[test]
fn test_identifier_with_whitespace_is_rejected() {
    let report = ErrorReport::new("job 1", "s1", "text", "text");
    let result = ValidationService::default().validate(&report);

    assert_eq!(
        result.violations(),
        ["job_id must not contain whitespace or control characters"]
    );
}

#[test]
fn test_limits_are_configurable() {
    let limits = ValidationLimits {
        max_identifier_length: 4,
        max_text_length: 5,
    };
    let service = ValidationService::with_default_rules(limits);
    let report = ErrorReport::new("job-12", "s1", "too long", "ok");

    assert_eq!(
        service.validate(&report).violations(),
        [
            "job_id must not exceed 4 characters",
            "original_text must not exceed 5 characters",
        ]
    );
}

#[test]
fn test_custom_rule_extends_defaults_in_order() {
    let mut rules = default_rules(&ValidationLimits::default());
    rules.push(FnRule::boxed("no_shouting", |report: &ErrorReport| {
        (report.corrected_text().chars().any(char::is_alphabetic)
            && report.corrected_text() == report.corrected_text().to_uppercase())
        .then(|| "corrected_text must not be all caps".to_string())
    }));
    let service = ValidationService::new(rules);

    let report = ErrorReport::new("", "s1", "hello", "HELLO");
    assert_eq!(
        service.validate(&report).violations(),
        ["job_id is required", "corrected_text must not be all caps"]
    );
    assert_eq!(service.rule_names().last(), Some(&"no_shouting"));
}

#[test]
fn test_rule_names_follow_registration_order() {
    let service = ValidationService::default();
    assert_eq!(
        service.rule_names(),
        [
            "required:job_id",
            "required:speaker_id",
            "required:original_text",
            "identifier_format:job_id",
            "identifier_format:speaker_id",
            "text_length:original_text",
            "text_length:corrected_text",
        ]
    );
}
