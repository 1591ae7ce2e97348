//! # Platform Container
//!
//! Constructs every component once and hands the shared handles out. Swap a
//! remote store or a hosted search cluster in here; the routers only ever
//! see the capability traits.

use crate::config::RuntimeConfig;
use anyhow::Context;
use awp_get_ready::adapters::MemorySearchIndex;
use awp_get_ready::{EnrollmentIndexer, GetReadyRouter, GetReadyStore};
use awp_onboard::adapters::TableOnboardStore;
use awp_onboard::{CreateSchoolInput, CreateStudentInput, OnboardRouter};
use awp_store::MemoryEntityStore;
use shared_bus::InMemoryEventBus;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// All long-lived components, fully wired.
pub struct Platform {
    pub bus: Arc<InMemoryEventBus>,
    pub store: Arc<MemoryEntityStore>,
    pub index: Arc<MemorySearchIndex>,
    pub onboard: Arc<OnboardRouter>,
    pub get_ready: Arc<GetReadyRouter>,
    indexer: Arc<EnrollmentIndexer>,
}

impl Platform {
    /// Build the component graph from configuration.
    #[must_use]
    pub fn build(config: &RuntimeConfig) -> Self {
        let store = Arc::new(MemoryEntityStore::new());
        let bus = Arc::new(InMemoryEventBus::new(config.event_bus_name.clone()));
        let index = Arc::new(MemorySearchIndex::new());

        let onboard = Arc::new(OnboardRouter::new(
            Arc::new(TableOnboardStore::new(store.clone())),
            bus.clone(),
        ));
        let get_ready = Arc::new(GetReadyRouter::new(Arc::new(GetReadyStore::new(
            store.clone(),
            index.clone(),
            config.search_index.clone(),
        ))));
        let indexer = Arc::new(EnrollmentIndexer::new(
            index.clone(),
            config.search_index.clone(),
        ));

        info!(
            table = %config.table_name,
            bus = %config.event_bus_name,
            index = %config.search_index,
            "platform wired"
        );

        Self {
            bus,
            store,
            index,
            onboard,
            get_ready,
            indexer,
        }
    }

    /// Attach the enrollment indexer to the bus and run it in the
    /// background. Must be called before the first enrollment, otherwise
    /// early events are missed.
    pub fn spawn_indexer(&self) -> JoinHandle<()> {
        let subscription = self.bus.subscribe(EnrollmentIndexer::filter());
        tokio::spawn(self.indexer.clone().run(subscription))
    }

    /// Populate a couple of demo schools and students through the public
    /// routers, so enrollment events flow exactly as they would in use.
    pub async fn seed_demo(&self) -> anyhow::Result<()> {
        let springfield = self
            .onboard
            .create_school(CreateSchoolInput {
                name: "Springfield Elementary".into(),
            })
            .await
            .context("seeding schools")?;
        let shelbyville = self
            .onboard
            .create_school(CreateSchoolInput {
                name: "Shelbyville Academy".into(),
            })
            .await
            .context("seeding schools")?;

        let roster = [
            ("Bart", "Simpson", &springfield.id),
            ("Lisa", "Simpson", &springfield.id),
            ("Milhouse", "Van Houten", &shelbyville.id),
        ];
        for (first_name, last_name, school_id) in roster {
            self.onboard
                .create_student(CreateStudentInput {
                    first_name: first_name.into(),
                    last_name: last_name.into(),
                    school_id: (*school_id).clone(),
                })
                .await
                .context("seeding students")?;
        }

        info!("demo data seeded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awp_get_ready::SearchStudentsInput;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_seed_flows_through_indexer() {
        let platform = Platform::build(&RuntimeConfig::default());
        let _indexer = platform.spawn_indexer();

        platform.seed_demo().await.unwrap();
        assert_eq!(platform.store.len().unwrap(), 5);

        // The projection is asynchronous; poll until the seeded students land
        timeout(Duration::from_secs(1), async {
            loop {
                if platform.index.doc_count("students").unwrap() == Some(3) {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();

        let hits = platform
            .get_ready
            .search_students(SearchStudentsInput {
                query: "simpson".into(),
                school_id: None,
            })
            .await
            .unwrap();
        assert_eq!(hits.len(), 2);
    }
}
