//! NATS Event Publisher
//!
//! Publishes `ErrorCreated` events as JSON to a NATS subject for consumers
//! in other processes.
//!
//! ## Features
//!
//! - Connection established lazily on the first publish, so a broker that
//!   is briefly unavailable at start-up does not block the process
//! - Correlation identifier carried in a message header
//! - Each publish is flushed before it is acknowledged
//! - Subscribers decode the same JSON envelope; undecodable messages are skipped
//!
//! ## Example
//!
//! ```ignore
//! use errep_providers::events::NatsEventPublisher;
//!
//! let publisher = NatsEventPublisher::new("nats://localhost:4222")
//!     .with_subject("errep.error_created");
//! publisher.publish_error_created(event).await?;
//! ```

use async_nats::{Client, HeaderMap};
use async_trait::async_trait;
use errep_domain::error::{Error, Result};
use errep_domain::events::DomainEventStream;
use errep_domain::ports::{ErrorEventPublisher, PublishAck};
use errep_domain::{DomainEvent, ErrorCreated};
use futures::{StreamExt, stream};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::constants::{NATS_CORRELATION_HEADER, NATS_DEFAULT_SUBJECT, NATS_DEFAULT_URL};

/// Event publisher for NATS
pub struct NatsEventPublisher {
    url: String,
    subject: String,
    client_name: Option<String>,
    client: OnceCell<Client>,
}

impl NatsEventPublisher {
    /// Create a publisher for the server at `url`
    ///
    /// No connection is made until the first publish.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            subject: NATS_DEFAULT_SUBJECT.to_string(),
            client_name: None,
            client: OnceCell::new(),
        }
    }

    /// Publish to `subject` instead of the default
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Identify this client to the server
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }

    /// Server URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Subject events are published to
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Whether a connection has been established
    pub fn is_connected(&self) -> bool {
        self.client.initialized()
    }

    async fn client(&self) -> Result<&Client> {
        self.client
            .get_or_try_init(|| async {
                info!("Connecting to NATS server at {}", self.url);
                let mut options = async_nats::ConnectOptions::new();
                if let Some(name) = &self.client_name {
                    options = options.name(name.as_str());
                }
                let client = options.connect(self.url.as_str()).await.map_err(|e| {
                    Error::publish_with_source(
                        format!("Failed to connect to NATS server at {}", self.url),
                        e,
                    )
                })?;
                info!("Connected to NATS server at {}", self.url);
                Ok(client)
            })
            .await
    }
}

impl std::fmt::Debug for NatsEventPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NatsEventPublisher")
            .field("url", &self.url)
            .field("subject", &self.subject)
            .field("connected", &self.is_connected())
            .finish()
    }
}

#[async_trait]
impl ErrorEventPublisher for NatsEventPublisher {
    async fn publish_error_created(&self, event: ErrorCreated) -> Result<PublishAck> {
        let mut headers = HeaderMap::new();
        headers.insert(NATS_CORRELATION_HEADER, event.correlation_id.to_string().as_str());

        let payload = serde_json::to_vec(&DomainEvent::from(event))
            .map_err(|e| Error::publish_with_source("Failed to serialize event", e))?;

        let client = self.client().await?;
        client
            .publish_with_headers(self.subject.clone(), headers, payload.into())
            .await
            .map_err(|e| {
                Error::publish_with_source(
                    format!("Failed to publish to NATS subject '{}'", self.subject),
                    e,
                )
            })?;
        client
            .flush()
            .await
            .map_err(|e| Error::publish_with_source("Failed to flush NATS connection", e))?;

        debug!("Published ErrorCreated to NATS subject '{}'", self.subject);
        Ok(PublishAck::new(self.provider_name()))
    }

    async fn subscribe_events(&self) -> Result<DomainEventStream> {
        let client = self.client().await?;
        let subscriber = client.subscribe(self.subject.clone()).await.map_err(|e| {
            Error::publish_with_source(
                format!("Failed to subscribe to NATS subject '{}'", self.subject),
                e,
            )
        })?;
        // The server must know about the subscription before later publishes
        client
            .flush()
            .await
            .map_err(|e| Error::publish_with_source("Failed to flush NATS connection", e))?;

        let stream = stream::unfold(subscriber, |mut sub| async move {
            while let Some(message) = sub.next().await {
                match serde_json::from_slice::<DomainEvent>(&message.payload) {
                    Ok(event) => return Some((event, sub)),
                    Err(e) => warn!("Skipping undecodable NATS message: {}", e),
                }
            }
            None
        });

        Ok(Box::pin(stream))
    }

    fn provider_name(&self) -> &str {
        "nats"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use errep_application::ports::registry::{
    EVENT_PUBLISHER_ADAPTERS, EventPublisherAdapterConfig, EventPublisherAdapterEntry,
};

/// Factory function for NATS publisher instances
fn nats_publisher_factory(
    config: &EventPublisherAdapterConfig,
) -> std::result::Result<Arc<dyn ErrorEventPublisher>, String> {
    let url = config.url.as_deref().unwrap_or(NATS_DEFAULT_URL);
    let mut publisher = NatsEventPublisher::new(url);
    if let Some(subject) = config.subject.as_deref() {
        if subject.trim().is_empty() {
            return Err("subject must not be empty".to_string());
        }
        publisher = publisher.with_subject(subject);
    }
    if let Some(name) = config.extra.get("client_name") {
        publisher = publisher.with_client_name(name.as_str());
    }
    Ok(Arc::new(publisher))
}

#[linkme::distributed_slice(EVENT_PUBLISHER_ADAPTERS)]
static NATS_PUBLISHER: EventPublisherAdapterEntry = EventPublisherAdapterEntry {
    name: "nats",
    description: "JSON events on a NATS subject (distributed)",
    factory: nats_publisher_factory,
};
