//! Domain Port Interfaces
//!
//! Contracts that storage and messaging adapters implement. The domain and
//! application layers depend only on these traits; concrete adapters live in
//! `errep-providers` and are selected through the adapter registry.

/// Event publisher port
pub mod events;
/// Error report repository port
pub mod repository;

pub use events::{ErrorEventPublisher, PublishAck, SharedErrorEventPublisher};
pub use repository::{ErrorReportRepository, SharedErrorReportRepository};
