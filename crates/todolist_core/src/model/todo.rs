//! To-do item domain model.
//!
//! # Responsibility
//! - Define the canonical record handed between the view-model and the
//!   persistence collaborator.
//! - Provide lifecycle helpers for the completion flag.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another item.
//! - A freshly constructed item starts open (`done == false`).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every to-do item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// Validation failure for item construction and persistence write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    /// The nil UUID is reserved and never a valid item identity.
    NilUuid,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "nil uuid is not a valid todo id"),
        }
    }
}

impl Error for TodoValidationError {}

/// One entry of the to-do list.
///
/// Identity is minted here rather than by the store, so the same object can
/// be appended to the visible list and handed to the collaborator without a
/// persistence round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Stable global ID used for updates and auditing.
    pub uuid: TodoId,
    /// Free-form label. No uniqueness or non-emptiness is enforced.
    pub text: String,
    /// Completion flag. Archive persists and drops items where this is set.
    pub done: bool,
}

impl Todo {
    /// Creates a new open item with a generated stable ID.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            text: text.into(),
            done: false,
        }
    }

    /// Creates an item with a caller-provided stable ID.
    ///
    /// Used by import/test paths where identity already exists externally.
    pub fn with_id(uuid: TodoId, text: impl Into<String>) -> Result<Self, TodoValidationError> {
        if uuid.is_nil() {
            return Err(TodoValidationError::NilUuid);
        }
        Ok(Self {
            uuid,
            text: text.into(),
            done: false,
        })
    }

    /// Checks invariants required before a persistence write.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.uuid.is_nil() {
            return Err(TodoValidationError::NilUuid);
        }
        Ok(())
    }

    /// Marks this item as completed.
    pub fn complete(&mut self) {
        self.done = true;
    }

    /// Clears the completion flag.
    pub fn reopen(&mut self) {
        self.done = false;
    }

    /// Returns whether this item still counts toward the remaining total.
    pub fn is_open(&self) -> bool {
        !self.done
    }
}
