//! Error Report Repository Port
//!
//! Contract every storage adapter honours identically:
//!
//! - `save` assigns a globally unique identifier, writes atomically, and never
//!   lets concurrent submissions collide or overwrite each other.
//! - `get_by_id` returns `Ok(None)` for unknown identifiers. Only
//!   infrastructure faults are errors.
//! - No adapter accepts or rejects inputs differently from another; all of
//!   them delegate the stored form to [`ErrorReport::persisted_copy`].

use crate::entities::ErrorReport;
use crate::error::Result;
use crate::value_objects::ReportId;
use async_trait::async_trait;
use std::sync::Arc;

/// Durable storage for error reports
///
/// # Example
///
/// ```ignore
/// use errep_domain::ports::ErrorReportRepository;
///
/// let id = repository.save(&report).await?;
/// let stored = repository.get_by_id(&id).await?.expect("just saved");
/// assert!(stored.same_content(&report));
/// ```
#[async_trait]
pub trait ErrorReportRepository: Send + Sync {
    /// Store a validated report, returning the identifier assigned to it
    ///
    /// Fails with [`crate::Error::InvalidTransition`] when the report is not
    /// VALIDATED, [`crate::Error::ImmutableReport`] when it is already
    /// persisted, and [`crate::Error::Persistence`] on adapter faults.
    async fn save(&self, report: &ErrorReport) -> Result<ReportId>;

    /// Fetch a stored report by identifier
    ///
    /// Fails with [`crate::Error::Infrastructure`] only on adapter faults.
    async fn get_by_id(&self, id: &ReportId) -> Result<Option<ErrorReport>>;

    /// All reports stored for a job, oldest first
    async fn list_by_job(&self, job_id: &str) -> Result<Vec<ErrorReport>>;

    /// Registry key of the adapter
    fn provider_name(&self) -> &str;
}

/// Shared repository for dependency injection
pub type SharedErrorReportRepository = Arc<dyn ErrorReportRepository>;
