//! # Get-Ready Domain
//!
//! Everything that prepares a school for a working session: searching the
//! student index, creating sessions, and attaching students to them. Also
//! home to the enrollment indexer, the bus consumer that keeps the search
//! index in step with onboarding.
//!
//! - `query` - the search query model and its evaluation semantics
//! - `ports` - the [`SearchIndex`] capability interface
//! - `adapters` - [`adapters::MemorySearchIndex`], the in-process index
//! - `data_access` - sessions and search over the table and the index
//! - `indexer` - the student-enrolled consumer
//! - `router` - the typed procedure surface the gateway dispatches into

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod adapters;
pub mod data_access;
pub mod errors;
pub mod indexer;
pub mod ports;
pub mod query;
pub mod router;
pub mod schemas;

pub use data_access::{GetReadyDataAccess, GetReadyStore};
pub use errors::{GetReadyError, SearchError};
pub use indexer::EnrollmentIndexer;
pub use ports::SearchIndex;
pub use query::{student_search_query, SearchQuery};
pub use router::GetReadyRouter;
pub use schemas::{
    AddStudentToSessionInput, CreateSessionInput, GetSessionStudentsInput, ListSessionsInput,
    SearchStudentsInput,
};
