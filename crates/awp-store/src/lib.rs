//! # Entity Store
//!
//! One logical key-value table shared by every record kind in the platform
//! (schools, students, sessions, session-students), disambiguated by an
//! entity-type discriminator and reachable through three secondary indexes:
//! by type, by school, and by session.
//!
//! The table is exposed as the [`EntityStore`] port. [`MemoryEntityStore`]
//! is the process-local implementation; a managed key-value service would
//! sit behind the same trait in a distributed deployment.
//!
//! Writes are upserts: putting a row with an existing id overwrites it.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod errors;
pub mod item;
pub mod memory;
pub mod store;

pub use errors::StoreError;
pub use item::TableItem;
pub use memory::MemoryEntityStore;
pub use store::EntityStore;
