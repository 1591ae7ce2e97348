//! # Integration Test Suite
//!
//! Cross-crate tests that exercise the platform the way a deployment would:
//! a wired [`awp_runtime::Platform`] with the enrollment indexer running,
//! driven through the routers and the HTTP gateway.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

#[cfg(test)]
mod integration;

use awp_runtime::{Platform, RuntimeConfig};
use std::time::Duration;
use tokio::task::JoinHandle;

/// A wired platform with its indexer running, ready for a test to drive.
pub struct TestNode {
    pub platform: Platform,
    indexer: JoinHandle<()>,
}

impl TestNode {
    #[must_use]
    pub fn start() -> Self {
        let platform = Platform::build(&RuntimeConfig::default());
        let indexer = platform.spawn_indexer();
        Self { platform, indexer }
    }

    /// Wait until the search index holds `expected` documents. Panics after
    /// a second, which is an eternity for the in-process bus.
    pub async fn wait_for_indexed(&self, expected: usize) {
        tokio::time::timeout(Duration::from_secs(1), async {
            loop {
                if self.platform.index.doc_count("students").unwrap_or(None) == Some(expected) {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap_or_else(|_| panic!("indexer never reached {expected} documents"));
    }
}

impl Drop for TestNode {
    fn drop(&mut self) {
        self.indexer.abort();
    }
}
