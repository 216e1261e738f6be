//! Severity and category value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Triage severity of a transcription error, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Cosmetic or no-op correction
    #[default]
    Low,
    /// Meaning mostly preserved
    Medium,
    /// Meaning noticeably altered
    High,
    /// Transcript unusable for the affected span
    Critical,
}

impl Severity {
    /// Stable string form used in storage and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of divergence between the transcript and its correction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Original and corrected text are identical
    #[default]
    NoChange,
    /// Only letter case differs
    Capitalization,
    /// Only punctuation or spacing differs
    Punctuation,
    /// Words were misspelled but recognisably the same
    Spelling,
    /// Words were replaced by different words
    WordSubstitution,
    /// The transcript is missing words present in the correction
    Omission,
    /// The transcript contains words absent from the correction
    Insertion,
    /// Most of the text was rewritten
    Rewrite,
}

impl ErrorCategory {
    /// Stable string form used in storage and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoChange => "no_change",
            Self::Capitalization => "capitalization",
            Self::Punctuation => "punctuation",
            Self::Spelling => "spelling",
            Self::WordSubstitution => "word_substitution",
            Self::Omission => "omission",
            Self::Insertion => "insertion",
            Self::Rewrite => "rewrite",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of categorizing a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Assigned severity
    pub severity: Severity,
    /// Assigned category
    pub category: ErrorCategory,
}

impl Classification {
    /// Create a classification
    pub fn new(severity: Severity, category: ErrorCategory) -> Self {
        Self { severity, category }
    }
}
