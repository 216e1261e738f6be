//! Domain Events
//!
//! Events announced after state changes in the domain.

/// Event payload types
pub mod domain_events;

pub use domain_events::{DomainEvent, ErrorCreated, ReportSnapshot};

use futures::Stream;
use std::pin::Pin;

/// Stream of domain events delivered to a subscriber
pub type DomainEventStream = Pin<Box<dyn Stream<Item = DomainEvent> + Send>>;
