//! Tests for the adapter registry
//!
//! Uses `extern crate errep_providers` to force linkme registration of the
//! real adapters.

// Force linkme registration of all adapters from errep-providers
extern crate errep_providers;

use std::sync::Arc;

use errep_application::ports::registry::{
    AdapterRegistry, EventPublisherAdapterConfig, PortKind, RepositoryAdapterConfig,
    RepositoryAdapterEntry,
};
use errep_domain::ports::ErrorReportRepository;
use errep_providers::repository::InMemoryErrorReportRepository;

fn scratch_repository(
    _config: &RepositoryAdapterConfig,
) -> Result<Arc<dyn ErrorReportRepository>, String> {
    Ok(Arc::new(InMemoryErrorReportRepository::new()))
}

#[test]
fn test_linked_adapters_are_discovered() {
    let registry = AdapterRegistry::discover().expect("registry");

    let repositories = registry.keys(PortKind::Repository);
    assert!(repositories.contains(&"in_memory"), "{repositories:?}");
    assert!(repositories.contains(&"filesystem"), "{repositories:?}");

    let publishers = registry.keys(PortKind::EventPublisher);
    assert!(publishers.contains(&"in_memory"), "{publishers:?}");
}

#[test]
fn test_resolve_in_memory_adapters() {
    let registry = AdapterRegistry::discover().expect("registry");

    let repository = registry
        .resolve(PortKind::Repository, "in_memory")
        .expect("repository");
    assert_eq!(repository.kind(), PortKind::Repository);
    let repository = repository.into_repository().expect("repository adapter");
    assert_eq!(repository.provider_name(), "in_memory");

    let publisher = registry
        .resolve(PortKind::EventPublisher, "in_memory")
        .expect("publisher")
        .into_event_publisher()
        .expect("publisher adapter");
    assert_eq!(publisher.provider_name(), "in_memory");
}

#[test]
fn test_unknown_key_is_a_configuration_error() {
    let registry = AdapterRegistry::discover().expect("registry");

    let err = registry
        .resolve(PortKind::Repository, "cassandra")
        .expect_err("unknown key");

    assert!(err.is_configuration());
    let message = err.to_string();
    assert!(message.contains("cassandra"), "{message}");
    assert!(message.contains("Available adapters"), "{message}");
    assert!(message.contains("in_memory"), "{message}");
}

#[test]
fn test_ensure_registered_does_not_construct() {
    let registry = AdapterRegistry::discover().expect("registry");

    assert!(registry.ensure_registered(PortKind::Repository, "filesystem").is_ok());
    assert!(
        registry
            .ensure_registered(PortKind::EventPublisher, "kafka")
            .expect_err("kafka is not linked")
            .is_configuration()
    );
}

#[test]
fn test_factory_rejection_is_a_configuration_error() {
    let registry = AdapterRegistry::discover().expect("registry");

    let err = registry
        .resolve_repository(&RepositoryAdapterConfig::new("filesystem"))
        .err()
        .expect("filesystem needs a data directory");

    assert!(err.is_configuration());
    assert!(err.to_string().contains("filesystem"));
}

#[test]
fn test_resolve_with_full_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = AdapterRegistry::discover().expect("registry");

    let repository = registry
        .resolve_repository(&RepositoryAdapterConfig::new("filesystem").with_data_dir(dir.path()))
        .expect("filesystem repository");
    assert_eq!(repository.provider_name(), "filesystem");

    let publisher = registry
        .resolve_event_publisher(&EventPublisherAdapterConfig::new("in_memory").with_capacity(8))
        .expect("publisher");
    assert_eq!(publisher.provider_name(), "in_memory");
}

#[test]
fn test_registered_entry_extends_without_touching_resolution() {
    let registry = AdapterRegistry::builder()
        .register_repository(RepositoryAdapterEntry {
            name: "scratch",
            description: "Test-only repository",
            factory: scratch_repository,
        })
        .build()
        .expect("registry");

    assert_eq!(registry.keys(PortKind::Repository), ["scratch"]);
    assert!(registry.resolve(PortKind::Repository, "scratch").is_ok());
    assert!(registry.keys(PortKind::EventPublisher).is_empty());
}

#[test]
fn test_duplicate_keys_are_rejected() {
    let err = AdapterRegistry::builder()
        .with_linked_adapters()
        .register_repository(RepositoryAdapterEntry {
            name: "in_memory",
            description: "Shadowing entry",
            factory: |_config| Err("never built".to_string()),
        })
        .build()
        .expect_err("duplicate key");

    assert!(err.is_configuration());
    assert!(err.to_string().contains("in_memory"));
}

#[test]
fn test_describe_lists_descriptions() {
    let registry = AdapterRegistry::discover().expect("registry");

    let described = registry.describe(PortKind::Repository);
    assert!(
        described
            .iter()
            .all(|(name, description)| !name.is_empty() && !description.is_empty())
    );
    assert_eq!(described.len(), registry.keys(PortKind::Repository).len());
}
