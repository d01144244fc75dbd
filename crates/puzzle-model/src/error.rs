//! Error types for the puzzle model

use crate::id::ObjectId;

/// Errors raised by document construction and updates
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Object ids must be non-empty
    #[error("object id cannot be empty")]
    EmptyObjectId,

    /// Slot index outside `0..3`
    #[error("invalid recipe slot index: {0} (expected 0, 1 or 2)")]
    InvalidSlot(usize),

    /// Recipe index outside the recipe list
    #[error("recipe index {index} out of range ({len} recipes)")]
    RecipeOutOfRange { index: usize, len: usize },

    /// Id does not name an object in the document
    #[error("unknown object: {0}")]
    UnknownObject(ObjectId),

    /// Object id already taken
    #[error("duplicate object id: {0}")]
    DuplicateObject(ObjectId),

    /// Object names must be non-empty after trimming
    #[error("object name cannot be empty")]
    EmptyName,
}
