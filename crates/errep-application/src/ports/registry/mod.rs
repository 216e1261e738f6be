//! Adapter Registry System
//!
//! Compile-time registration of port adapters using the `linkme` crate,
//! and the read-only [`AdapterRegistry`] that resolves them at start-up.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Adapter Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Adapter defines:   #[linkme::distributed_slice(ADAPTERS)]   │
//! │                        static ENTRY: AdapterEntry = ...         │
//! │                              ↓                                  │
//! │  2. Slice declared:    #[linkme::distributed_slice]             │
//! │                        pub static ADAPTERS: [Entry] = [..]      │
//! │                              ↓                                  │
//! │  3. Registry frozen:   AdapterRegistry::discover()              │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = filesystem" → adapter        │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering an Adapter (in errep-providers)
//!
//! ```ignore
//! use errep_application::ports::registry::{RepositoryAdapterEntry, REPOSITORY_ADAPTERS};
//!
//! #[linkme::distributed_slice(REPOSITORY_ADAPTERS)]
//! static IN_MEMORY_REPOSITORY: RepositoryAdapterEntry = RepositoryAdapterEntry {
//!     name: "in_memory",
//!     description: "Process-local repository backed by a concurrent map",
//!     factory: |_config| Ok(Arc::new(InMemoryErrorReportRepository::new())),
//! };
//! ```
//!
//! ### Resolving an Adapter (in errep-infrastructure)
//!
//! ```ignore
//! let registry = AdapterRegistry::discover()?;
//! let repository = registry.resolve_repository(&RepositoryAdapterConfig::new("in_memory"))?;
//! ```

pub mod adapter_registry;
pub mod event_publisher;
pub mod repository;

pub use adapter_registry::{AdapterRegistry, AdapterRegistryBuilder, PortKind, ResolvedAdapter};
pub use event_publisher::{
    EVENT_PUBLISHER_ADAPTERS, EventPublisherAdapterConfig, EventPublisherAdapterEntry,
    EventPublisherFactory,
};
pub use repository::{
    REPOSITORY_ADAPTERS, RepositoryAdapterConfig, RepositoryAdapterEntry, RepositoryFactory,
};
