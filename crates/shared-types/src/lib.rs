//! # Shared Types
//!
//! Flat domain records shared across the platform's subsystems, plus the
//! identifier scheme used for rows in the shared entity table.
//!
//! Every record here is a plain value: no nested aggregates, no object
//! references. A `Student` points at its `School` by id only, and a
//! `SessionStudent` carries a denormalized copy of the student's identity
//! fields taken at association time.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod entities;
pub mod ids;

pub use entities::{
    EntityType, School, SearchStudent, Session, SessionStudent, Student,
};
pub use ids::{generate_id, session_student_id};
