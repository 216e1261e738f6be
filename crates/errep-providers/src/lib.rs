//! # errep - Adapter Implementations
//!
//! Concrete adapters for the ports declared in `errep-domain`. Each adapter
//! registers itself into the linkme slices of `errep-application`, so
//! linking this crate is enough to make it selectable by configuration key.
//!
//! ## Adapters
//!
//! | Port | Key | Implementation |
//! |------|-----|----------------|
//! | `ErrorReportRepository` | `in_memory` | [`repository::InMemoryErrorReportRepository`] |
//! | `ErrorReportRepository` | `filesystem` | [`repository::FilesystemErrorReportRepository`] |
//! | `ErrorEventPublisher` | `in_memory` | [`events::InMemoryEventPublisher`] |
//! | `ErrorEventPublisher` | `nats` | `events::NatsEventPublisher` (feature `events-nats`) |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! errep-providers = { version = "0.1", default-features = false, features = ["repository-memory", "events-nats"] }
//! ```

pub use errep_domain::error::{Error, Result};
pub use errep_domain::ports::{ErrorEventPublisher, ErrorReportRepository};

/// Adapter-specific constants
pub mod constants;

/// Event publisher implementations
pub mod events;

/// Repository implementations
pub mod repository;
