//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the persistence collaborator contract the view-model depends on.
//! - Isolate SQLite query details from view-model orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Todo::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod todo_repo;
