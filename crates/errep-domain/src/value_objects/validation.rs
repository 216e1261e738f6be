//! Aggregated validation outcome

use serde::{Deserialize, Serialize};

/// Outcome of running every validation rule against a report
///
/// Violations keep rule evaluation order. A result is never partial: an
/// invalid result lists the violations of every rule that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    violations: Vec<String>,
}

impl ValidationResult {
    /// A result with no violations
    pub fn valid() -> Self {
        Self::default()
    }

    /// Build a result from violations collected in rule order
    pub fn from_violations(violations: Vec<String>) -> Self {
        Self { violations }
    }

    /// Whether every rule passed
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violation messages in rule evaluation order
    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    /// Consume the result, returning the violation messages
    pub fn into_violations(self) -> Vec<String> {
        self.violations
    }
}
