//! # Event Publisher
//!
//! Defines the publishing side of the event bus.

use crate::events::{EventEnvelope, EventFilter};
use crate::subscriber::Subscription;
use crate::DEFAULT_CHANNEL_CAPACITY;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Errors from publishing an event.
///
/// The in-memory bus never constructs these: `broadcast::Sender::send`
/// only fails when no receiver exists, which publish tolerates. They are
/// the error surface a managed-bus adapter behind [`EventPublisher`]
/// reports, and callers of the trait must handle both.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PublishError {
    /// The bus reported a failed entry for this event.
    #[error("event bus rejected entry: {0}")]
    Rejected(String),

    /// The bus is no longer accepting events.
    #[error("event bus closed")]
    Closed,
}

/// Trait for publishing events to the bus.
///
/// This is the only interface the write path holds; it surfaces a plain
/// success/failure outcome. A failure after the caller has already persisted
/// its own record is the caller's problem to surface, not to roll back.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an envelope to the bus.
    async fn publish(&self, event: EventEnvelope) -> Result<(), PublishError>;

    /// Total events accepted by the bus.
    fn events_published(&self) -> u64;
}

/// In-memory implementation of the event bus.
///
/// Uses `tokio::sync::broadcast` for multi-producer, multi-consumer
/// semantics. Suitable for single-process operation; a distributed
/// deployment would put a managed bus behind the same trait.
pub struct InMemoryEventBus {
    /// Broadcast sender for events.
    sender: broadcast::Sender<EventEnvelope>,

    /// Deployment-supplied bus name, used in log fields.
    bus_name: String,

    /// Active subscription count by filter key.
    subscriptions: Arc<RwLock<HashMap<String, usize>>>,

    /// Total events published.
    events_published: AtomicU64,

    /// Channel capacity.
    capacity: usize,
}

impl InMemoryEventBus {
    /// Create a new in-memory event bus with default capacity.
    #[must_use]
    pub fn new(bus_name: impl Into<String>) -> Self {
        Self::with_capacity(bus_name, DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a new in-memory event bus with specified capacity.
    #[must_use]
    pub fn with_capacity(bus_name: impl Into<String>, capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            bus_name: bus_name.into(),
            subscriptions: Arc::new(RwLock::new(HashMap::new())),
            events_published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Subscribe to events matching a filter.
    ///
    /// Returns a `Subscription` handle that can be used to receive events.
    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        let receiver = self.sender.subscribe();
        let filter_key = format!("{:?}/{:?}", filter.sources, filter.detail_types);

        // Track subscription
        {
            if let Ok(mut subs) = self.subscriptions.write() {
                *subs.entry(filter_key.clone()).or_insert(0) += 1;
            }
        }

        debug!(bus = %self.bus_name, filter = %filter_key, "New subscription created");

        Subscription::new(receiver, filter, self.subscriptions.clone(), filter_key)
    }

    /// Get the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Get the channel capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the deployment-supplied bus name.
    #[must_use]
    pub fn bus_name(&self) -> &str {
        &self.bus_name
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), PublishError> {
        let event_id = event.id;
        let source = event.source.clone();
        let detail_type = event.detail_type.clone();

        // Counter tracks accepted events, including ones nobody received
        self.events_published.fetch_add(1, Ordering::Relaxed);

        match self.sender.send(event) {
            Ok(receiver_count) => {
                debug!(
                    bus = %self.bus_name,
                    event = %event_id,
                    source = %source,
                    detail_type = %detail_type,
                    receivers = receiver_count,
                    "Event published"
                );
                Ok(())
            }
            Err(_) => {
                // No receivers. The consumer may simply not be running yet;
                // a missing search document is the tolerated staleness, so
                // this is not a failed entry.
                warn!(
                    bus = %self.bus_name,
                    event = %event_id,
                    source = %source,
                    detail_type = %detail_type,
                    "Event dropped (no receivers)"
                );
                Ok(())
            }
        }
    }

    fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}
