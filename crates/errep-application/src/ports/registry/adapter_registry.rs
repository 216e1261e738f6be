//! Adapter Registry
//!
//! An explicit, read-only mapping from configuration key to adapter factory
//! for each port. The registry is built once at process start, from the
//! linked distributed slices and any entries registered on the builder, and
//! never changes afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use errep_domain::ports::{ErrorEventPublisher, ErrorReportRepository};
use errep_domain::{Error, Result};
use tracing::debug;

use super::event_publisher::{
    EVENT_PUBLISHER_ADAPTERS, EventPublisherAdapterConfig, EventPublisherAdapterEntry,
};
use super::repository::{REPOSITORY_ADAPTERS, RepositoryAdapterConfig, RepositoryAdapterEntry};

/// Port an adapter satisfies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortKind {
    /// [`ErrorReportRepository`]
    Repository,
    /// [`ErrorEventPublisher`]
    EventPublisher,
}

impl PortKind {
    /// Name used in error messages
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Repository => "repository",
            Self::EventPublisher => "event publisher",
        }
    }
}

impl fmt::Display for PortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An adapter produced by [`AdapterRegistry::resolve`]
#[derive(Clone)]
pub enum ResolvedAdapter {
    /// Repository adapter
    Repository(Arc<dyn ErrorReportRepository>),
    /// Event publisher adapter
    EventPublisher(Arc<dyn ErrorEventPublisher>),
}

impl ResolvedAdapter {
    /// Port the adapter satisfies
    pub fn kind(&self) -> PortKind {
        match self {
            Self::Repository(_) => PortKind::Repository,
            Self::EventPublisher(_) => PortKind::EventPublisher,
        }
    }

    /// The repository adapter, if this is one
    pub fn into_repository(self) -> Option<Arc<dyn ErrorReportRepository>> {
        match self {
            Self::Repository(repository) => Some(repository),
            Self::EventPublisher(_) => None,
        }
    }

    /// The event publisher adapter, if this is one
    pub fn into_event_publisher(self) -> Option<Arc<dyn ErrorEventPublisher>> {
        match self {
            Self::EventPublisher(publisher) => Some(publisher),
            Self::Repository(_) => None,
        }
    }
}

impl fmt::Debug for ResolvedAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repository(r) => f.debug_tuple("Repository").field(&r.provider_name()).finish(),
            Self::EventPublisher(p) => f
                .debug_tuple("EventPublisher")
                .field(&p.provider_name())
                .finish(),
        }
    }
}

/// Builder collecting adapter entries before the registry is frozen
#[derive(Debug, Default)]
pub struct AdapterRegistryBuilder {
    repositories: Vec<RepositoryAdapterEntry>,
    event_publishers: Vec<EventPublisherAdapterEntry>,
}

impl AdapterRegistryBuilder {
    /// Add every adapter linked into the binary
    pub fn with_linked_adapters(mut self) -> Self {
        self.repositories.extend(REPOSITORY_ADAPTERS.iter().copied());
        self.event_publishers
            .extend(EVENT_PUBLISHER_ADAPTERS.iter().copied());
        self
    }

    /// Add a repository adapter
    pub fn register_repository(mut self, entry: RepositoryAdapterEntry) -> Self {
        self.repositories.push(entry);
        self
    }

    /// Add an event publisher adapter
    pub fn register_event_publisher(mut self, entry: EventPublisherAdapterEntry) -> Self {
        self.event_publishers.push(entry);
        self
    }

    /// Freeze the registry
    ///
    /// # Errors
    ///
    /// Returns a configuration error if two adapters for the same port share
    /// a key.
    pub fn build(self) -> Result<AdapterRegistry> {
        let repositories = index(PortKind::Repository, self.repositories, |e| e.name)?;
        let event_publishers =
            index(PortKind::EventPublisher, self.event_publishers, |e| e.name)?;
        debug!(
            repositories = ?repositories.keys().collect::<Vec<_>>(),
            event_publishers = ?event_publishers.keys().collect::<Vec<_>>(),
            "Adapter registry built"
        );
        Ok(AdapterRegistry {
            repositories,
            event_publishers,
        })
    }
}

fn index<E>(
    port: PortKind,
    entries: Vec<E>,
    key: impl Fn(&E) -> &'static str,
) -> Result<BTreeMap<&'static str, E>> {
    let mut map = BTreeMap::new();
    for entry in entries {
        let name = key(&entry);
        if map.insert(name, entry).is_some() {
            return Err(Error::configuration(format!(
                "Duplicate {port} adapter key '{name}'"
            )));
        }
    }
    Ok(map)
}

/// Read-only mapping from adapter key to factory, per port
#[derive(Debug, Clone)]
pub struct AdapterRegistry {
    repositories: BTreeMap<&'static str, RepositoryAdapterEntry>,
    event_publishers: BTreeMap<&'static str, EventPublisherAdapterEntry>,
}

impl AdapterRegistry {
    /// Start building a registry
    pub fn builder() -> AdapterRegistryBuilder {
        AdapterRegistryBuilder::default()
    }

    /// Registry of every adapter linked into the binary
    ///
    /// # Errors
    ///
    /// Returns a configuration error on duplicate keys.
    pub fn discover() -> Result<Self> {
        Self::builder().with_linked_adapters().build()
    }

    /// Create the adapter registered under `key` with default settings
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `key` is unregistered for `port` or
    /// the adapter factory rejects its configuration.
    pub fn resolve(&self, port: PortKind, key: &str) -> Result<ResolvedAdapter> {
        match port {
            PortKind::Repository => self
                .resolve_repository(&RepositoryAdapterConfig::new(key))
                .map(ResolvedAdapter::Repository),
            PortKind::EventPublisher => self
                .resolve_event_publisher(&EventPublisherAdapterConfig::new(key))
                .map(ResolvedAdapter::EventPublisher),
        }
    }

    /// Create the repository adapter selected by `config`
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown key or a factory failure.
    pub fn resolve_repository(
        &self,
        config: &RepositoryAdapterConfig,
    ) -> Result<Arc<dyn ErrorReportRepository>> {
        let entry = self
            .repositories
            .get(config.provider.as_str())
            .ok_or_else(|| self.unknown(PortKind::Repository, &config.provider))?;
        (entry.factory)(config).map_err(|e| factory_error(PortKind::Repository, entry.name, e))
    }

    /// Create the event publisher adapter selected by `config`
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown key or a factory failure.
    pub fn resolve_event_publisher(
        &self,
        config: &EventPublisherAdapterConfig,
    ) -> Result<Arc<dyn ErrorEventPublisher>> {
        let entry = self
            .event_publishers
            .get(config.provider.as_str())
            .ok_or_else(|| self.unknown(PortKind::EventPublisher, &config.provider))?;
        (entry.factory)(config)
            .map_err(|e| factory_error(PortKind::EventPublisher, entry.name, e))
    }

    /// Check that `key` is registered for `port` without creating an adapter
    ///
    /// # Errors
    ///
    /// Returns a configuration error listing the available keys.
    pub fn ensure_registered(&self, port: PortKind, key: &str) -> Result<()> {
        if self.contains(port, key) {
            Ok(())
        } else {
            Err(self.unknown(port, key))
        }
    }

    /// Whether `key` is registered for `port`
    pub fn contains(&self, port: PortKind, key: &str) -> bool {
        match port {
            PortKind::Repository => self.repositories.contains_key(key),
            PortKind::EventPublisher => self.event_publishers.contains_key(key),
        }
    }

    /// Registered keys for `port`, sorted
    pub fn keys(&self, port: PortKind) -> Vec<&'static str> {
        match port {
            PortKind::Repository => self.repositories.keys().copied().collect(),
            PortKind::EventPublisher => self.event_publishers.keys().copied().collect(),
        }
    }

    /// `(key, description)` pairs for `port`, sorted by key
    pub fn describe(&self, port: PortKind) -> Vec<(&'static str, &'static str)> {
        match port {
            PortKind::Repository => self
                .repositories
                .values()
                .map(|e| (e.name, e.description))
                .collect(),
            PortKind::EventPublisher => self
                .event_publishers
                .values()
                .map(|e| (e.name, e.description))
                .collect(),
        }
    }

    fn unknown(&self, port: PortKind, key: &str) -> Error {
        Error::configuration(format!(
            "Unknown {port} adapter '{key}'. Available adapters: {:?}",
            self.keys(port)
        ))
    }
}

fn factory_error(port: PortKind, name: &str, message: String) -> Error {
    Error::configuration(format!(
        "Failed to create {port} adapter '{name}': {message}"
    ))
}
