//! Application Ports
//!
//! Re-exports the domain port traits and adds the adapter registry that
//! binds configuration keys to concrete adapters.

pub mod registry;

pub use errep_domain::ports::{
    ErrorEventPublisher, ErrorReportRepository, PublishAck, SharedErrorEventPublisher,
    SharedErrorReportRepository,
};
