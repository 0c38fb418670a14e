//! Domain model for the person roster.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every persisted record is identified by a stable `PersonId`.

pub mod person;
