//! Tests for the error taxonomy

use errep_domain::Error;

#[test]
fn test_validation_error_lists_all_violations() {
    let err = Error::validation(vec!["a is required".into(), "b is required".into()]);

    assert!(err.is_validation());
    assert_eq!(err.violations().len(), 2);
    assert_eq!(err.to_string(), "Validation failed: a is required; b is required");
}

#[test]
fn test_error_kinds_are_distinguishable() {
    let persistence = Error::persistence("write failed");
    let publish = Error::publish("broker unreachable");
    let configuration = Error::configuration("unknown adapter");

    assert!(persistence.is_persistence() && !persistence.is_publish());
    assert!(publish.is_publish() && !publish.is_persistence());
    assert!(configuration.is_configuration());
    assert!(persistence.violations().is_empty());
}

#[test]
fn test_source_is_preserved() {
    use std::error::Error as _;

    let io = std::io::Error::other("boom");
    let err = Error::persistence_with_source("write failed", io);

    assert!(err.source().is_some());
}
