//! Validation Pipeline
//!
//! An injected, ordered sequence of [`ValidationRule`]s. Every rule runs on
//! every report; the pipeline never stops at the first failure, so a caller
//! always receives the complete list of violations in rule order.
//!
//! New rules are added by building the service with a longer rule list,
//! never by editing existing rules:
//!
//! ```ignore
//! let rules = default_rules(&ValidationLimits::default())
//!     .into_iter()
//!     .chain([FnRule::boxed("no_profanity", |r| check_profanity(r))])
//!     .collect();
//! let service = ValidationService::new(rules);
//! ```

use crate::domain_services::rules::{IdentifierFormatRule, RequiredFieldRule, TextLengthRule};
use errep_domain::{ErrorReport, ValidationResult};
use std::fmt;
use std::sync::Arc;

/// Default maximum identifier length (characters)
pub const DEFAULT_MAX_IDENTIFIER_LENGTH: usize = 128;

/// Default maximum text length (characters)
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 10_000;

/// A single, pure validation rule
///
/// Rules must not perform I/O. A rule reports at most one violation message.
pub trait ValidationRule: Send + Sync {
    /// Short stable name used in logs
    fn name(&self) -> &str;

    /// Check the report, returning a violation message when the rule fails
    fn check(&self, report: &ErrorReport) -> Option<String>;
}

/// Rule backed by a plain function or closure
pub struct FnRule<F> {
    name: &'static str,
    check: F,
}

impl<F> FnRule<F>
where
    F: Fn(&ErrorReport) -> Option<String> + Send + Sync + 'static,
{
    /// Wrap `check` as a rule called `name`
    pub fn new(name: &'static str, check: F) -> Self {
        Self { name, check }
    }

    /// Wrap `check` as a boxed rule ready to be injected
    pub fn boxed(name: &'static str, check: F) -> Box<dyn ValidationRule> {
        Box::new(Self::new(name, check))
    }
}

impl<F> ValidationRule for FnRule<F>
where
    F: Fn(&ErrorReport) -> Option<String> + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    fn check(&self, report: &ErrorReport) -> Option<String> {
        (self.check)(report)
    }
}

/// Limits applied by the built-in rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    /// Maximum length of job and speaker identifiers
    pub max_identifier_length: usize,
    /// Maximum length of original and corrected text
    pub max_text_length: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_identifier_length: DEFAULT_MAX_IDENTIFIER_LENGTH,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

/// The built-in rule set, in evaluation order
pub fn default_rules(limits: &ValidationLimits) -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(RequiredFieldRule::job_id()),
        Box::new(RequiredFieldRule::speaker_id()),
        Box::new(RequiredFieldRule::original_text()),
        Box::new(IdentifierFormatRule::job_id(limits.max_identifier_length)),
        Box::new(IdentifierFormatRule::speaker_id(limits.max_identifier_length)),
        Box::new(TextLengthRule::original_text(limits.max_text_length)),
        Box::new(TextLengthRule::corrected_text(limits.max_text_length)),
    ]
}

/// Runs every rule and aggregates the violations
#[derive(Clone)]
pub struct ValidationService {
    rules: Arc<[Box<dyn ValidationRule>]>,
}

impl ValidationService {
    /// Create a service over an ordered rule set
    pub fn new(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    /// Create a service with the built-in rules
    pub fn with_default_rules(limits: ValidationLimits) -> Self {
        Self::new(default_rules(&limits))
    }

    /// Validate a report against every rule
    pub fn validate(&self, report: &ErrorReport) -> ValidationResult {
        let violations = self
            .rules
            .iter()
            .filter_map(|rule| rule.check(report))
            .collect();
        ValidationResult::from_violations(violations)
    }

    /// Names of the registered rules, in evaluation order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::with_default_rules(ValidationLimits::default())
    }
}

impl fmt::Debug for ValidationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationService")
            .field("rules", &self.rule_names())
            .finish()
    }
}
