//! View-model services.
//!
//! # Responsibility
//! - Mediate between a user-facing view and the persistence collaborator.
//! - Keep UI layers decoupled from storage details.

pub mod todo_list;
