//! Event Publisher Adapter Registry
//!
//! Auto-registration slice for `ErrorCreated` publisher adapters.

use std::collections::HashMap;
use std::sync::Arc;

use errep_domain::ports::ErrorEventPublisher;

/// Configuration for event publisher adapter creation
#[derive(Debug, Clone, Default)]
pub struct EventPublisherAdapterConfig {
    /// Adapter key (e.g., "in_memory", "nats")
    pub provider: String,
    /// Channel capacity for in-process buses
    pub capacity: Option<usize>,
    /// Broker URL for networked adapters
    pub url: Option<String>,
    /// Subject or topic events are published to
    pub subject: Option<String>,
    /// Additional adapter-specific configuration
    pub extra: HashMap<String, String>,
}

impl EventPublisherAdapterConfig {
    /// Create a new config with the given adapter key
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the channel capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the broker URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the subject
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Factory signature for event publisher adapters
pub type EventPublisherFactory =
    fn(&EventPublisherAdapterConfig) -> Result<Arc<dyn ErrorEventPublisher>, String>;

/// Registry entry for event publisher adapters
#[derive(Clone, Copy)]
pub struct EventPublisherAdapterEntry {
    /// Unique adapter key
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the adapter
    pub factory: EventPublisherFactory,
}

impl std::fmt::Debug for EventPublisherAdapterEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventPublisherAdapterEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[linkme::distributed_slice]
pub static EVENT_PUBLISHER_ADAPTERS: [EventPublisherAdapterEntry] = [..];
