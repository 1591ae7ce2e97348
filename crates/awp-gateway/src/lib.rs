//! # HTTP Gateway
//!
//! The single HTTP entry point for the platform. Requests are JSON-RPC 2.0
//! shaped; a top-level array is a batch and every element is answered in
//! order. Methods dispatch into the onboarding and get-ready routers.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod config;
pub mod error;
pub mod rpc;
pub mod service;

pub use config::GatewayConfig;
pub use error::{ApiError, GatewayError};
pub use service::GatewayService;
