//! Domain entities

/// Error report entity and lifecycle status
pub mod error_report;

pub use error_report::{ErrorReport, ReportStatus};
