//! Repository Adapter Registry
//!
//! Auto-registration slice for error report repository adapters.
//! Adapters register themselves with `#[linkme::distributed_slice]` and are
//! discovered at runtime through [`AdapterRegistry`](super::AdapterRegistry).

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use errep_domain::ports::ErrorReportRepository;

/// Configuration for repository adapter creation
///
/// Contains every option a repository adapter might need.
/// Adapters use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct RepositoryAdapterConfig {
    /// Adapter key (e.g., "in_memory", "filesystem")
    pub provider: String,
    /// Directory for file-backed adapters
    pub data_dir: Option<PathBuf>,
    /// Additional adapter-specific configuration
    pub extra: HashMap<String, String>,
}

impl RepositoryAdapterConfig {
    /// Create a new config with the given adapter key
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Factory signature for repository adapters
pub type RepositoryFactory =
    fn(&RepositoryAdapterConfig) -> Result<Arc<dyn ErrorReportRepository>, String>;

/// Registry entry for repository adapters
///
/// Each adapter registers one entry. The entry contains metadata and a
/// factory function creating adapter instances.
#[derive(Clone, Copy)]
pub struct RepositoryAdapterEntry {
    /// Unique adapter key
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the adapter
    pub factory: RepositoryFactory,
}

impl std::fmt::Debug for RepositoryAdapterEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryAdapterEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

// Adapters submit entries at link time
#[linkme::distributed_slice]
pub static REPOSITORY_ADAPTERS: [RepositoryAdapterEntry] = [..];
