//! Filesystem repository adapter
//!
//! Stores one JSON document per report under a data directory:
//!
//! ```text
//! <data_dir>/
//! ├── 0b6f…e2.json        stored report
//! └── .5c1a…9d.json.tmp   write in progress
//! ```
//!
//! A document is written to a hidden temporary file, synced, then renamed
//! into place, so readers never observe a partially written report.

use crate::constants::{REPORT_FILE_EXTENSION, REPORT_TEMP_FILE_EXTENSION};
use async_trait::async_trait;
use errep_domain::error::{Error, Result};
use errep_domain::ports::ErrorReportRepository;
use errep_domain::{ErrorReport, ReportId};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// File-backed error report repository
#[derive(Debug, Clone)]
pub struct FilesystemErrorReportRepository {
    data_dir: PathBuf,
}

impl FilesystemErrorReportRepository {
    /// Open a repository rooted at `data_dir`, creating the directory
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the directory cannot be created.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir).map_err(|e| {
            Error::persistence_with_source(
                format!("Failed to create data directory {}", data_dir.display()),
                e,
            )
        })?;
        Ok(Self { data_dir })
    }

    /// Directory holding the report documents
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn report_path(&self, id: &ReportId) -> PathBuf {
        self.data_dir
            .join(format!("{}.{REPORT_FILE_EXTENSION}", id.as_str()))
    }

    fn temp_path(&self, id: &ReportId) -> PathBuf {
        self.data_dir.join(format!(
            ".{}.{REPORT_FILE_EXTENSION}.{REPORT_TEMP_FILE_EXTENSION}",
            id.as_str()
        ))
    }

    async fn write_atomically(&self, id: &ReportId, contents: &[u8]) -> Result<()> {
        persist_atomically(&self.temp_path(id), &self.report_path(id), contents).await
    }

    async fn read_report(path: &Path) -> Result<Option<ErrorReport>> {
        let contents = match tokio::fs::read(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::infrastructure_with_source(
                    format!("Failed to read report {}", path.display()),
                    e,
                ));
            }
        };
        serde_json::from_slice(&contents).map(Some).map_err(|e| {
            Error::infrastructure_with_source(
                format!("Corrupted report document {}", path.display()),
                e,
            )
        })
    }
}

/// Identifiers this adapter could have assigned; anything else cannot name a file
fn is_storable_id(id: &ReportId) -> bool {
    let id = id.as_str();
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Write `contents` to `temp_path`, sync it, then rename it to `final_path`
///
/// Once the temp file exists, any failure removes it again.
async fn persist_atomically(temp_path: &Path, final_path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(temp_path)
        .await
        .map_err(|e| write_error(temp_path, e))?;

    let written = async {
        file.write_all(contents).await?;
        file.sync_all().await
    }
    .await;
    drop(file);

    let outcome = match written {
        Ok(()) => tokio::fs::rename(temp_path, final_path)
            .await
            .map_err(|e| write_error(final_path, e)),
        Err(e) => Err(write_error(temp_path, e)),
    };
    if outcome.is_err() {
        if let Err(cleanup) = tokio::fs::remove_file(temp_path).await {
            warn!(path = %temp_path.display(), error = %cleanup, "Failed to remove temp file");
        }
    }
    outcome
}

fn write_error(path: &Path, e: std::io::Error) -> Error {
    Error::persistence_with_source(format!("Failed to write {}", path.display()), e)
}

#[async_trait]
impl ErrorReportRepository for FilesystemErrorReportRepository {
    async fn save(&self, report: &ErrorReport) -> Result<ReportId> {
        let id = ReportId::generate();
        let stored = report.persisted_copy(id.clone())?;
        let contents = serde_json::to_vec_pretty(&stored).map_err(|e| {
            Error::persistence_with_source("Failed to serialize report", e)
        })?;

        self.write_atomically(&id, &contents).await?;
        debug!(report_id = %id, dir = %self.data_dir.display(), "Stored report on disk");
        Ok(id)
    }

    async fn get_by_id(&self, id: &ReportId) -> Result<Option<ErrorReport>> {
        if !is_storable_id(id) {
            return Ok(None);
        }
        Self::read_report(&self.report_path(id)).await
    }

    async fn list_by_job(&self, job_id: &str) -> Result<Vec<ErrorReport>> {
        let mut entries = tokio::fs::read_dir(&self.data_dir).await.map_err(|e| {
            Error::infrastructure_with_source(
                format!("Failed to list {}", self.data_dir.display()),
                e,
            )
        })?;

        let mut reports = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            Error::infrastructure_with_source(
                format!("Failed to list {}", self.data_dir.display()),
                e,
            )
        })? {
            let path = entry.path();
            let is_report = path
                .extension()
                .is_some_and(|ext| ext == REPORT_FILE_EXTENSION)
                && !path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with('.'));
            if !is_report {
                continue;
            }
            if let Some(report) = Self::read_report(&path)
                .await?
                .filter(|report| report.job_id() == job_id)
            {
                reports.push(report);
            }
        }
        reports.sort_by_key(ErrorReport::created_at);
        Ok(reports)
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use errep_application::ports::registry::{
    REPOSITORY_ADAPTERS, RepositoryAdapterConfig, RepositoryAdapterEntry,
};

/// Factory function for filesystem repository instances
fn filesystem_repository_factory(
    config: &RepositoryAdapterConfig,
) -> std::result::Result<Arc<dyn ErrorReportRepository>, String> {
    let data_dir = config
        .data_dir
        .as_ref()
        .ok_or_else(|| "data_dir is required for the filesystem repository".to_string())?;
    let repository = FilesystemErrorReportRepository::open(data_dir).map_err(|e| e.to_string())?;
    Ok(Arc::new(repository))
}

#[linkme::distributed_slice(REPOSITORY_ADAPTERS)]
static FILESYSTEM_REPOSITORY: RepositoryAdapterEntry = RepositoryAdapterEntry {
    name: "filesystem",
    description: "JSON document per report in a local directory (durable)",
    factory: filesystem_repository_factory,
};
