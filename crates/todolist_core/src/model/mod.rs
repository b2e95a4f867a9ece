//! Domain model for the to-do list.
//!
//! # Responsibility
//! - Define the canonical item record shared by the view-model and the
//!   persistence collaborator.
//!
//! # Invariants
//! - Every item is identified by a stable `TodoId` minted at construction.
//! - Completion state lives on the item; removal from view happens only
//!   through the archive operation.

pub mod todo;
