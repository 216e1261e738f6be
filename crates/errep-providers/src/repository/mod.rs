//! Repository Adapter Implementations
//!
//! | Adapter | Durability | Description |
//! |---------|------------|-------------|
//! | InMemoryErrorReportRepository | Process | Concurrent map, lost on restart |
//! | FilesystemErrorReportRepository | Disk | One JSON document per report |
//!
//! Both adapters store reports through `ErrorReport::persisted_copy`, so
//! they accept and reject exactly the same inputs.

#[cfg(feature = "repository-filesystem")]
pub mod filesystem;
#[cfg(feature = "repository-memory")]
pub mod in_memory;

#[cfg(feature = "repository-filesystem")]
pub use filesystem::FilesystemErrorReportRepository;
#[cfg(feature = "repository-memory")]
pub use in_memory::InMemoryErrorReportRepository;

// Re-export port trait from the domain layer
pub use errep_domain::ports::ErrorReportRepository;
