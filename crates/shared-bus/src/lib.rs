//! # Shared Bus - Event Bus for Cross-Domain Hand-Off
//!
//! The onboarding write path and the search indexing path never call each
//! other directly: onboarding publishes an event, indexing subscribes.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │  Onboarding  │                    │   Indexing   │
//! │    router    │    publish()       │   consumer   │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! Delivery is at-least-once from the consumer's perspective; consumers are
//! expected to be idempotent (the indexer upserts by document id). Events are
//! carried in an [`EventEnvelope`] addressed by `(source, detail_type)`, with
//! a closed, versioned payload decoded and validated at the consumer
//! boundary.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{
    EventDecodeError, EventEnvelope, EventFilter, StudentEnrolledV1, ENROLLMENT_SOURCE,
    STUDENT_ENROLLED,
};
pub use publisher::{EventPublisher, InMemoryEventBus, PublishError};
pub use subscriber::{Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before backpressure.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
