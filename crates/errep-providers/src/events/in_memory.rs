//! In-Memory Event Publisher
//!
//! Publisher backed by a tokio broadcast channel for in-process fan-out,
//! plus a bounded, ordered delivery log that tests and diagnostics can
//! inspect. Nothing survives a restart; use a broker-backed adapter when
//! consumers live in other processes.
//!
//! ## Example
//!
//! ```ignore
//! use errep_providers::events::InMemoryEventPublisher;
//!
//! let publisher = InMemoryEventPublisher::new();
//! let mut events = publisher.subscribe();
//!
//! publisher.publish_error_created(event).await?;
//! let delivered = events.next().await;
//! ```

use async_trait::async_trait;
use errep_domain::error::Result;
use errep_domain::events::DomainEventStream;
use errep_domain::ports::{ErrorEventPublisher, PublishAck};
use errep_domain::{CorrelationId, DomainEvent, ErrorCreated};
use futures::stream;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};
use tracing::{debug, warn};

use crate::constants::EVENT_CHANNEL_DEFAULT_CAPACITY;

/// Event publisher using tokio broadcast channels
///
/// Every published event is appended to the delivery log, which counts as
/// the guaranteed downstream subscriber, and broadcast to live subscribers.
/// Clones share the channel and the log.
///
/// ## Capacity
///
/// When a slow subscriber falls more than `capacity` events behind, it
/// skips the oldest ones. The delivery log keeps the most recent
/// `capacity` events.
#[derive(Clone)]
pub struct InMemoryEventPublisher {
    sender: broadcast::Sender<DomainEvent>,
    delivered: Arc<RwLock<VecDeque<ErrorCreated>>>,
    capacity: usize,
}

impl InMemoryEventPublisher {
    /// Create a publisher with default capacity (1024)
    pub fn new() -> Self {
        Self::with_capacity(EVENT_CHANNEL_DEFAULT_CAPACITY)
    }

    /// Create with custom capacity
    ///
    /// A zero capacity is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            delivered: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Stream of events published after this call
    pub fn subscribe(&self) -> DomainEventStream {
        let receiver = self.sender.subscribe();

        // Convert broadcast receiver to a Stream that skips lagged events
        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Event stream lagged by {} events", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        });

        Box::pin(stream)
    }

    /// The most recent `capacity` delivered events, in publish order
    pub async fn published(&self) -> Vec<ErrorCreated> {
        self.delivered.read().await.iter().cloned().collect()
    }

    /// Delivered events carrying `correlation_id`, in publish order
    pub async fn published_for(&self, correlation_id: CorrelationId) -> Vec<ErrorCreated> {
        self.delivered
            .read()
            .await
            .iter()
            .filter(|event| event.correlation_id == correlation_id)
            .cloned()
            .collect()
    }

    /// Current number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryEventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryEventPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryEventPublisher")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ErrorEventPublisher for InMemoryEventPublisher {
    async fn publish_error_created(&self, event: ErrorCreated) -> Result<PublishAck> {
        // Log and broadcast under one lock so both observe the same order
        let mut delivered = self.delivered.write().await;
        if delivered.len() == self.capacity {
            delivered.pop_front();
        }
        delivered.push_back(event.clone());
        let subscribers = self.sender.send(DomainEvent::from(event)).unwrap_or_default();
        drop(delivered);

        debug!(subscribers, "Published ErrorCreated in memory");
        Ok(PublishAck::new(self.provider_name()).with_delivered_to(subscribers))
    }

    async fn subscribe_events(&self) -> Result<DomainEventStream> {
        Ok(self.subscribe())
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use errep_application::ports::registry::{
    EVENT_PUBLISHER_ADAPTERS, EventPublisherAdapterConfig, EventPublisherAdapterEntry,
};

/// Factory function for in-memory publisher instances
fn in_memory_publisher_factory(
    config: &EventPublisherAdapterConfig,
) -> std::result::Result<Arc<dyn ErrorEventPublisher>, String> {
    let capacity = config.capacity.unwrap_or(EVENT_CHANNEL_DEFAULT_CAPACITY);
    if capacity == 0 {
        return Err("capacity must be greater than zero".to_string());
    }
    Ok(Arc::new(InMemoryEventPublisher::with_capacity(capacity)))
}

#[linkme::distributed_slice(EVENT_PUBLISHER_ADAPTERS)]
static IN_MEMORY_PUBLISHER: EventPublisherAdapterEntry = EventPublisherAdapterEntry {
    name: "in_memory",
    description: "In-process broadcast with a bounded delivery log (non-persistent)",
    factory: in_memory_publisher_factory,
};
