//! Built-in validation rules
//!
//! Each rule instance checks one field so a report with two empty required
//! fields yields exactly two messages.

use crate::domain_services::validation::ValidationRule;
use errep_domain::ErrorReport;

/// A checkable field of an error report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField {
    /// Transcription job identifier
    JobId,
    /// Speaker identifier
    SpeakerId,
    /// Text as transcribed
    OriginalText,
    /// Text as corrected
    CorrectedText,
}

impl ReportField {
    /// Field name as it appears in violation messages
    pub fn name(self) -> &'static str {
        match self {
            Self::JobId => "job_id",
            Self::SpeakerId => "speaker_id",
            Self::OriginalText => "original_text",
            Self::CorrectedText => "corrected_text",
        }
    }

    /// Field value on `report`
    pub fn value(self, report: &ErrorReport) -> &str {
        match self {
            Self::JobId => report.job_id(),
            Self::SpeakerId => report.speaker_id(),
            Self::OriginalText => report.original_text(),
            Self::CorrectedText => report.corrected_text(),
        }
    }
}

/// Field must contain something other than whitespace
#[derive(Debug, Clone)]
pub struct RequiredFieldRule {
    field: ReportField,
    name: String,
}

impl RequiredFieldRule {
    /// Require `field`
    pub fn new(field: ReportField) -> Self {
        Self {
            field,
            name: format!("required:{}", field.name()),
        }
    }

    /// Require the job identifier
    pub fn job_id() -> Self {
        Self::new(ReportField::JobId)
    }

    /// Require the speaker identifier
    pub fn speaker_id() -> Self {
        Self::new(ReportField::SpeakerId)
    }

    /// Require the original text
    pub fn original_text() -> Self {
        Self::new(ReportField::OriginalText)
    }
}

impl ValidationRule for RequiredFieldRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, report: &ErrorReport) -> Option<String> {
        self.field
            .value(report)
            .trim()
            .is_empty()
            .then(|| format!("{} is required", self.field.name()))
    }
}

/// Identifier must be short and free of whitespace/control characters
///
/// Empty identifiers pass; [`RequiredFieldRule`] reports those.
#[derive(Debug, Clone)]
pub struct IdentifierFormatRule {
    field: ReportField,
    max_length: usize,
    name: String,
}

impl IdentifierFormatRule {
    /// Check `field` against `max_length`
    pub fn new(field: ReportField, max_length: usize) -> Self {
        Self {
            field,
            max_length,
            name: format!("identifier_format:{}", field.name()),
        }
    }

    /// Check the job identifier
    pub fn job_id(max_length: usize) -> Self {
        Self::new(ReportField::JobId, max_length)
    }

    /// Check the speaker identifier
    pub fn speaker_id(max_length: usize) -> Self {
        Self::new(ReportField::SpeakerId, max_length)
    }
}

impl ValidationRule for IdentifierFormatRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, report: &ErrorReport) -> Option<String> {
        let value = self.field.value(report);
        if value.trim().is_empty() {
            return None;
        }
        if value.chars().count() > self.max_length {
            return Some(format!(
                "{} must not exceed {} characters",
                self.field.name(),
                self.max_length
            ));
        }
        if value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Some(format!(
                "{} must not contain whitespace or control characters",
                self.field.name()
            ));
        }
        None
    }
}

/// Text must not exceed a maximum number of characters
#[derive(Debug, Clone)]
pub struct TextLengthRule {
    field: ReportField,
    max_length: usize,
    name: String,
}

impl TextLengthRule {
    /// Limit `field` to `max_length` characters
    pub fn new(field: ReportField, max_length: usize) -> Self {
        Self {
            field,
            max_length,
            name: format!("text_length:{}", field.name()),
        }
    }

    /// Limit the original text
    pub fn original_text(max_length: usize) -> Self {
        Self::new(ReportField::OriginalText, max_length)
    }

    /// Limit the corrected text
    pub fn corrected_text(max_length: usize) -> Self {
        Self::new(ReportField::CorrectedText, max_length)
    }
}

impl ValidationRule for TextLengthRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, report: &ErrorReport) -> Option<String> {
        (self.field.value(report).chars().count() > self.max_length).then(|| {
            format!(
                "{} must not exceed {} characters",
                self.field.name(),
                self.max_length
            )
        })
    }
}
