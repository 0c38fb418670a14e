//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the narrow persistence-provider contract the store depends on.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Person::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod memory_repo;
pub mod person_repo;
