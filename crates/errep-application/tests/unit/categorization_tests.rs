//! Tests for severity/category assignment

use errep_application::CategorizationService;
use errep_domain::{Classification, ErrorCategory, ErrorReport, Severity};

fn classify(original: &str, corrected: &str) -> Classification {
    CategorizationService::new().classify_texts(original, corrected)
}

#[test]
fn test_identical_text_is_lowest_severity() {
    let c = classify("the cat sat", "the cat sat");
    assert_eq!(c, Classification::new(Severity::Low, ErrorCategory::NoChange));
}

#[test]
fn test_case_only_change() {
    let c = classify("Hello World", "hello world");
    assert_eq!(c.category, ErrorCategory::Capitalization);
    assert_eq!(c.severity, Severity::Low);
}

#[test]
fn test_punctuation_only_change() {
    let c = classify("hello, world", "Hello world.");
    assert_eq!(c.category, ErrorCategory::Punctuation);
    assert_eq!(c.severity, Severity::Low);
}

#[test]
fn test_single_misspelling_in_long_sentence_is_low() {
    let c = classify("the quick brown fox jumps teh fence", "the quick brown fox jumps the fence");
    assert_eq!(c, Classification::new(Severity::Low, ErrorCategory::Spelling));
}

#[test]
fn test_misspelling_in_short_phrase_is_medium() {
    let c = classify("teh cat", "the cat");
    assert_eq!(c, Classification::new(Severity::Medium, ErrorCategory::Spelling));
}

#[test]
fn test_missing_word_is_omission() {
    let c = classify("please send the report today", "please send the final report today");
    assert_eq!(c, Classification::new(Severity::Medium, ErrorCategory::Omission));
}

#[test]
fn test_extra_word_is_insertion() {
    let c = classify("please send the the report", "please send the report");
    assert_eq!(c, Classification::new(Severity::Medium, ErrorCategory::Insertion));
}

#[test]
fn test_word_substitution_severity_scales() {
    let minor = classify("send the blue report", "send the red report");
    assert_eq!(minor, Classification::new(Severity::Medium, ErrorCategory::WordSubstitution));

    let major = classify("alpha beta gamma delta", "alpha beta omega sigma");
    assert_eq!(major, Classification::new(Severity::High, ErrorCategory::WordSubstitution));
}

#[test]
fn test_complete_rewrite_is_critical() {
    let c = classify("the cat sat on the mat", "a dog ran far away quickly");
    assert_eq!(c, Classification::new(Severity::Critical, ErrorCategory::Rewrite));
}

#[test]
fn test_classification_is_deterministic() {
    let report = ErrorReport::new("j1", "s1", "I scream for ice cream", "ice cream for I scream");
    let service = CategorizationService::default();
    assert_eq!(service.classify(&report), service.classify(&report));
}

#[test]
fn test_classify_is_total_for_odd_input() {
    let service = CategorizationService::default();
    for (original, corrected) in [("", ""), ("...", "!!!"), ("word", ""), ("", "word"), ("日本語", "日本")] {
        let _ = service.classify_texts(original, corrected);
    }
}
