//! Domain Services
//!
//! Pure business logic used by the submission use case: the validation
//! pipeline, its built-in rules and the categorization service. None of
//! these perform I/O or hold mutable state.

/// Severity/category assignment
pub mod categorization;
/// Built-in validation rules
pub mod rules;
/// Validation pipeline
pub mod validation;

pub use categorization::CategorizationService;
pub use rules::{IdentifierFormatRule, ReportField, RequiredFieldRule, TextLengthRule};
pub use validation::{
    DEFAULT_MAX_IDENTIFIER_LENGTH, DEFAULT_MAX_TEXT_LENGTH, FnRule, ValidationLimits,
    ValidationRule, ValidationService, default_rules,
};
