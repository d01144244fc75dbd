//! Render-ready views of the document
//!
//! Hosts draw these directly; they carry resolved names and image URLs so
//! no lookups happen at render time.

use puzzle_model::{validation, ObjectGroup, ObjectId, PuzzleDocument, RecipeSlot, RecipeViolation};

/// One object in a palette list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub id: ObjectId,
    pub name: String,
    pub image_url: Option<String>,
    /// Currently selected for slot assignment
    pub selected: bool,
}

/// One slot of a recipe row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub slot: RecipeSlot,
    pub object: Option<ObjectId>,
    /// `"?"` when unassigned or unknown
    pub name: String,
    pub image_url: Option<String>,
}

/// One recipe row: `a + b -> result`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRow {
    pub index: usize,
    pub slots: [SlotView; 3],
    /// Invariant violations currently held by this recipe
    pub violations: Vec<RecipeViolation>,
}

impl RecipeRow {
    /// Check if the row is flagged invalid
    #[inline]
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        !self.violations.is_empty()
    }
}

pub(crate) fn palette(
    doc: &PuzzleDocument,
    group: ObjectGroup,
    selection: Option<&ObjectId>,
) -> Vec<PaletteEntry> {
    doc.group(group)
        .iter()
        .map(|id| PaletteEntry {
            id: id.clone(),
            name: doc.display_name(Some(id)).to_string(),
            image_url: doc.image_url(Some(id)).map(str::to_string),
            selected: selection == Some(id),
        })
        .collect()
}

pub(crate) fn recipe_rows(doc: &PuzzleDocument) -> Vec<RecipeRow> {
    let violations = validation::audit(doc.recipes());

    doc.recipes()
        .iter()
        .enumerate()
        .map(|(index, recipe)| RecipeRow {
            index,
            slots: RecipeSlot::ALL.map(|slot| {
                let object = recipe.get(slot);
                SlotView {
                    slot,
                    object: object.cloned(),
                    name: doc.display_name(object).to_string(),
                    image_url: doc.image_url(object).map(str::to_string),
                }
            }),
            violations: violations
                .iter()
                .filter(|v| v.recipe() == index)
                .copied()
                .collect(),
        })
        .collect()
}
