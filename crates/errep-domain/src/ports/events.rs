//! Event Publisher Port
//!
//! Delivery is at-least-once. Events sharing a correlation identifier are
//! never reordered; no ordering is promised across correlation identifiers.
//! Failures are reported as [`crate::Error::Publish`] and must never be
//! reported as persistence failures.

use crate::error::Result;
use crate::events::{DomainEventStream, ErrorCreated};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Acknowledgement returned by a publisher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishAck {
    /// Adapter that accepted the event
    pub provider: String,
    /// Number of subscribers reached, when the adapter can tell
    pub delivered_to: Option<usize>,
}

impl PublishAck {
    /// Acknowledgement from `provider`
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            delivered_to: None,
        }
    }

    /// Record how many subscribers received the event
    pub fn with_delivered_to(mut self, count: usize) -> Self {
        self.delivered_to = Some(count);
        self
    }
}

/// Announces domain events to downstream consumers
#[async_trait]
pub trait ErrorEventPublisher: Send + Sync {
    /// Publish an `ErrorCreated` event
    async fn publish_error_created(&self, event: ErrorCreated) -> Result<PublishAck>;

    /// Stream of events published through this adapter after the call returns
    ///
    /// Fails with [`crate::Error::Publish`] when the subscription cannot be
    /// established.
    async fn subscribe_events(&self) -> Result<DomainEventStream>;

    /// Registry key of the adapter
    fn provider_name(&self) -> &str;
}

/// Shared publisher for dependency injection
pub type SharedErrorEventPublisher = Arc<dyn ErrorEventPublisher>;
