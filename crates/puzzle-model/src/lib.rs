//! Puzzle Model
//!
//! Typed document model for combination puzzles.
//!
//! # Core Concepts
//!
//! - [`PuzzleDocument`]: The whole puzzle being edited (objects, palettes, recipes)
//! - [`GameObject`]: A named, imaged entity usable as ingredient or result
//! - [`Recipe`]: Fixed 3-slot tuple `[ingredient, ingredient, result]`
//! - [`RecipeViolation`]: Self-production and duplicate-ingredient findings
//! - [`ImageData`]: Normalized image reference handed to a parent form
//!
//! # Example
//!
//! ```rust,ignore
//! use puzzle_model::{fixtures, validation, RecipeSlot, ObjectId};
//!
//! let doc = fixtures::sample_document();
//! let doc = doc.with_recipe_slot(0, RecipeSlot::Result, ObjectId::new("0")?)?;
//! let violations = validation::check_recipe(doc.recipes(), 0);
//! assert!(!violations.is_empty());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod document;
mod error;
mod id;
mod image;
mod object;
mod recipe;

pub mod fixtures;
pub mod validation;

// Re-exports
pub use document::{DocumentId, PuzzleDocument, UNKNOWN_NAME};
pub use error::ModelError;
pub use id::ObjectId;
pub use image::{ImageBlob, ImageData, ImageRef, MultipartForm, UPLOAD_FIELD};
pub use object::{GameObject, ObjectGroup};
pub use recipe::{Recipe, RecipeSlot};
pub use validation::RecipeViolation;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn fixture_edit_then_validate() {
        let doc = fixtures::sample_document();
        let water = ObjectId::new("0").unwrap();

        let edited = doc
            .with_recipe_slot(0, RecipeSlot::Result, water.clone())
            .unwrap();

        // Previous revision is untouched
        assert_eq!(doc.recipes()[0].result(), Some(&ObjectId::new("2").unwrap()));
        assert_eq!(edited.recipes()[0].result(), Some(&water));

        let violations = validation::check_recipe(edited.recipes(), 0);
        assert_eq!(violations, vec![RecipeViolation::SelfProduction { recipe: 0 }]);
    }

    #[test]
    fn document_json_interchange() {
        let doc = fixtures::sample_document();
        let json = serde_json::to_string(&doc).unwrap();
        let back: PuzzleDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
