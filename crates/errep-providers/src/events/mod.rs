//! Event Publisher Implementations
//!
//! ## Available Publishers
//!
//! | Publisher | Type | Description |
//! |-----------|------|-------------|
//! | InMemoryEventPublisher | In-Process | Tokio broadcast channel plus delivery log |
//! | NatsEventPublisher | Distributed | NATS for multi-process systems |
//!
//! ## Selection Guide
//!
//! - **Testing / single instance**: `in_memory`
//! - **Distributed**: `nats` (feature `events-nats`)

#[cfg(feature = "events-memory")]
pub mod in_memory;
#[cfg(feature = "events-nats")]
pub mod nats;

#[cfg(feature = "events-memory")]
pub use in_memory::InMemoryEventPublisher;
#[cfg(feature = "events-nats")]
pub use nats::NatsEventPublisher;

// Re-export port types from the domain layer
pub use errep_domain::events::{DomainEvent, DomainEventStream};
pub use errep_domain::ports::ErrorEventPublisher;
