//! # Runtime
//!
//! Builds the platform from configuration: the entity store, the event bus,
//! the search index, both domain routers, and the background indexer, all
//! wired by injection. Nothing in the domain crates reaches for a global.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod config;
pub mod container;

pub use config::{ConfigError, RuntimeConfig};
pub use container::Platform;
