//! Adapter selection configuration
//!
//! Each key selects one concrete adapter at process start; the selection
//! does not change for the lifetime of the process.

use crate::constants::{
    DEFAULT_EVENT_CAPACITY, DEFAULT_EVENT_PUBLISHER_PROVIDER, DEFAULT_REPOSITORY_PROVIDER,
};
use errep_application::ports::registry::{EventPublisherAdapterConfig, RepositoryAdapterConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Repository adapter selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Adapter key (e.g., "in_memory", "filesystem")
    pub provider: String,
    /// Directory for file-backed adapters
    pub data_dir: Option<PathBuf>,
    /// Adapter-specific options
    pub extra: HashMap<String, String>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_REPOSITORY_PROVIDER.to_string(),
            data_dir: None,
            extra: HashMap::new(),
        }
    }
}

impl RepositoryConfig {
    /// Registry configuration for the selected adapter
    pub fn to_adapter_config(&self) -> RepositoryAdapterConfig {
        let mut config = RepositoryAdapterConfig::new(&self.provider);
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir);
        }
        config.extra.clone_from(&self.extra);
        config
    }
}

/// Event publisher adapter selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventPublisherConfig {
    /// Adapter key (e.g., "in_memory", "nats")
    pub provider: String,
    /// Broadcast capacity for in-process adapters
    pub capacity: usize,
    /// NATS server URL
    pub nats_url: Option<String>,
    /// Subject events are published to
    pub subject: Option<String>,
    /// Adapter-specific options
    pub extra: HashMap<String, String>,
}

impl Default for EventPublisherConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EVENT_PUBLISHER_PROVIDER.to_string(),
            capacity: DEFAULT_EVENT_CAPACITY,
            nats_url: None,
            subject: None,
            extra: HashMap::new(),
        }
    }
}

impl EventPublisherConfig {
    /// Registry configuration for the selected adapter
    pub fn to_adapter_config(&self) -> EventPublisherAdapterConfig {
        let mut config =
            EventPublisherAdapterConfig::new(&self.provider).with_capacity(self.capacity);
        if let Some(url) = &self.nats_url {
            config = config.with_url(url);
        }
        if let Some(subject) = &self.subject {
            config = config.with_subject(subject);
        }
        config.extra.clone_from(&self.extra);
        config
    }
}

/// Adapter selection for every port
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptersConfig {
    /// Repository adapter
    pub repository: RepositoryConfig,
    /// Event publisher adapter
    pub event_publisher: EventPublisherConfig,
}
