//! Puzzle Editor
//!
//! Editing session for combination puzzles:
//! - Holds the injected document for the duration of an edit
//! - Selects objects and assigns them into recipe slots
//! - Checks recipe invariants and notifies the user of violations
//! - Adds empty recipes and creates objects through the new-object modal
//! - Renders palette and recipe views for a host UI
//!
//! # Example
//!
//! ```rust,ignore
//! use puzzle_editor::{EditorConfig, EditorSession, TracingNotifier};
//! use puzzle_model::{fixtures, ObjectId, RecipeSlot};
//! use std::sync::Arc;
//!
//! let mut session = EditorSession::new(
//!     fixtures::sample_document(),
//!     EditorConfig::new(),
//!     Arc::new(TracingNotifier),
//! );
//! let recipe = session.add_recipe();
//! session.select_object(ObjectId::new("0")?)?;
//! session.assign_slot(recipe, RecipeSlot::First)?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod config;
pub mod draft;
pub mod error;
pub mod notifier;
pub mod session;
pub mod view;

// Re-exports for convenience
pub use config::{CommitPolicy, EditorConfig, RecipeInsertion};
pub use draft::{DraftImageSink, NewObjectDraft};
pub use error::EditorError;
pub use notifier::{Notifier, TracingNotifier};
pub use session::{EditorSession, SlotAssignment};
pub use view::{PaletteEntry, RecipeRow, SlotView};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the editor
    pub use crate::{
        CommitPolicy, EditorConfig, EditorError, EditorSession, Notifier, SlotAssignment,
        TracingNotifier,
    };
    pub use puzzle_model::{ObjectGroup, ObjectId, RecipeSlot, RecipeViolation};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
