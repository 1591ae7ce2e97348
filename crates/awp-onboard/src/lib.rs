//! # Onboarding Domain
//!
//! Schools and the students enrolled at them. All records live in the shared
//! entity table; creating a student additionally publishes a
//! student-enrolled event for the search indexing consumer.
//!
//! Layout follows the platform's ports-and-adapters convention:
//!
//! - `ports` - the [`OnboardDataAccess`] capability interface
//! - `adapters` - [`adapters::TableOnboardStore`], the entity-table
//!   implementation
//! - `schemas` - procedure inputs with explicit validation
//! - `router` - the typed procedure surface the gateway dispatches into

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod adapters;
pub mod errors;
pub mod ports;
pub mod router;
pub mod schemas;

pub use errors::OnboardError;
pub use ports::OnboardDataAccess;
pub use router::OnboardRouter;
pub use schemas::{
    CreateSchoolInput, CreateStudentInput, DeleteSchoolInput, DeleteStudentInput,
    GetStudentsInput,
};
