//! In-memory repository adapter
//!
//! Stores reports in a concurrent map. Data is not persisted and is lost
//! on restart; intended for development, tests and single-process setups.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use errep_domain::error::Result;
use errep_domain::ports::ErrorReportRepository;
use errep_domain::{ErrorReport, ReportId};
use std::sync::Arc;
use tracing::debug;

/// In-memory error report repository
///
/// Clones share the same storage.
#[derive(Clone, Default)]
pub struct InMemoryErrorReportRepository {
    reports: Arc<DashMap<ReportId, ErrorReport>>,
}

impl InMemoryErrorReportRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            reports: Arc::new(DashMap::new()),
        }
    }

    /// Number of stored reports
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether no report has been stored
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl std::fmt::Debug for InMemoryErrorReportRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryErrorReportRepository")
            .field("reports", &self.reports.len())
            .finish()
    }
}

#[async_trait]
impl ErrorReportRepository for InMemoryErrorReportRepository {
    async fn save(&self, report: &ErrorReport) -> Result<ReportId> {
        loop {
            let id = ReportId::generate();
            // Vacant-only insert: an id collision retries instead of overwriting
            if let Entry::Vacant(slot) = self.reports.entry(id.clone()) {
                slot.insert(report.persisted_copy(id.clone())?);
                debug!(report_id = %id, "Stored report in memory");
                return Ok(id);
            }
        }
    }

    async fn get_by_id(&self, id: &ReportId) -> Result<Option<ErrorReport>> {
        Ok(self.reports.get(id).map(|entry| entry.value().clone()))
    }

    async fn list_by_job(&self, job_id: &str) -> Result<Vec<ErrorReport>> {
        let mut reports: Vec<ErrorReport> = self
            .reports
            .iter()
            .filter(|entry| entry.value().job_id() == job_id)
            .map(|entry| entry.value().clone())
            .collect();
        reports.sort_by_key(ErrorReport::created_at);
        Ok(reports)
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use errep_application::ports::registry::{
    REPOSITORY_ADAPTERS, RepositoryAdapterConfig, RepositoryAdapterEntry,
};

/// Factory function for in-memory repository instances
fn in_memory_repository_factory(
    _config: &RepositoryAdapterConfig,
) -> std::result::Result<Arc<dyn ErrorReportRepository>, String> {
    Ok(Arc::new(InMemoryErrorReportRepository::new()))
}

#[linkme::distributed_slice(REPOSITORY_ADAPTERS)]
static IN_MEMORY_REPOSITORY: RepositoryAdapterEntry = RepositoryAdapterEntry {
    name: "in_memory",
    description: "In-memory repository (fast, non-persistent)",
    factory: in_memory_repository_factory,
};
