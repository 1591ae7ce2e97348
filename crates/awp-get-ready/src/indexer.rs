//! # Enrollment Indexer
//!
//! The bus consumer that projects student-enrolled events into the search
//! index. Decode and contract validation happen here, at the boundary;
//! a malformed event is logged and dropped, never indexed.

use crate::errors::GetReadyError;
use crate::ports::SearchIndex;
use shared_bus::{EventEnvelope, EventFilter, Subscription, ENROLLMENT_SOURCE, STUDENT_ENROLLED};
use shared_types::SearchStudent;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Projects enrollment events into the student search index.
pub struct EnrollmentIndexer {
    index: Arc<dyn SearchIndex>,
    index_name: String,
}

impl EnrollmentIndexer {
    #[must_use]
    pub fn new(index: Arc<dyn SearchIndex>, index_name: impl Into<String>) -> Self {
        Self {
            index,
            index_name: index_name.into(),
        }
    }

    /// The subscription filter this consumer should be attached with.
    #[must_use]
    pub fn filter() -> EventFilter {
        EventFilter::for_event(ENROLLMENT_SOURCE, STUDENT_ENROLLED)
    }

    /// Index one event. The document is keyed by student id, so replays
    /// and duplicates overwrite in place.
    pub async fn handle(&self, event: &EventEnvelope) -> Result<(), GetReadyError> {
        let payload = event.decode_student_enrolled()?;
        let doc = SearchStudent {
            id: payload.id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            school_id: payload.school_id,
            enrolled_at: event.time.to_rfc3339(),
        };
        debug!(student_id = %doc.id, index = %self.index_name, "indexing enrollment");
        self.index.upsert(&self.index_name, doc).await?;
        Ok(())
    }

    /// Consume the subscription until the bus closes. Bad events are
    /// logged and skipped so one poisoned message cannot stall the
    /// projection.
    pub async fn run(self: Arc<Self>, mut subscription: Subscription) {
        info!(index = %self.index_name, "enrollment indexer started");
        while let Some(event) = subscription.recv().await {
            if let Err(error) = self.handle(&event).await {
                warn!(event_id = %event.id, %error, "failed to index enrollment");
            }
        }
        info!("event bus closed, enrollment indexer stopping");
    }
}
