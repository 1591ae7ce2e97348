//! Integration flows, one module per surface.

mod enrollment_flow;
mod gateway_http;
mod onboarding;
mod search;
mod sessions;
