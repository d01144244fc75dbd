//! Editor session
//!
//! Owns the puzzle document for the duration of an edit and applies user
//! actions to it:
//! - object selection
//! - recipe slot assignment with invariant checks
//! - adding empty recipes
//! - the new-object modal
//!
//! Every committed change replaces the document with an updated copy; the
//! previous document is never mutated.

use crate::config::{CommitPolicy, EditorConfig, RecipeInsertion};
use crate::draft::{DraftImageSink, NewObjectDraft};
use crate::error::EditorError;
use crate::notifier::Notifier;
use crate::view::{self, PaletteEntry, RecipeRow};
use puzzle_image_input::ImageSink;
use puzzle_model::{
    validation, GameObject, ImageData, ImageRef, ModelError, ObjectGroup, ObjectId,
    PuzzleDocument, Recipe, RecipeSlot, RecipeViolation,
};
use std::fmt;
use std::sync::Arc;

/// Outcome of [`EditorSession::assign_slot`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotAssignment {
    /// Nothing selected; no-op
    NoSelection,
    /// Written; the recipe still has empty slots so nothing was checked
    Incomplete,
    /// Written into the last empty slot and checked
    Complete {
        /// Violations reported to the user
        violations: Vec<RecipeViolation>,
        /// Whether the write was committed (see [`CommitPolicy`])
        committed: bool,
    },
}

impl SlotAssignment {
    /// Check if the document changed
    #[inline]
    #[must_use]
    pub fn committed(&self) -> bool {
        match self {
            Self::NoSelection => false,
            Self::Incomplete => true,
            Self::Complete { committed, .. } => *committed,
        }
    }
}

/// In-memory editing session over one [`PuzzleDocument`]
pub struct EditorSession {
    document: PuzzleDocument,
    selection: Option<ObjectId>,
    draft: Option<NewObjectDraft>,
    config: EditorConfig,
    notifier: Arc<dyn Notifier>,
    revision: u64,
}

impl fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("document", &self.document.id)
            .field("selection", &self.selection)
            .field("draft", &self.draft)
            .field("config", &self.config)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl EditorSession {
    /// Start a session over an injected document
    #[must_use]
    pub fn new(
        document: PuzzleDocument,
        config: EditorConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        tracing::info!(
            document = %document.id,
            objects = document.objects().len(),
            recipes = document.recipes().len(),
            "editor session started"
        );
        Self {
            document,
            selection: None,
            draft: None,
            config,
            notifier,
            revision: 0,
        }
    }

    /// Current document
    #[inline]
    #[must_use]
    pub fn document(&self) -> &PuzzleDocument {
        &self.document
    }

    /// End the session, yielding the document
    #[inline]
    #[must_use]
    pub fn into_document(self) -> PuzzleDocument {
        self.document
    }

    /// Session configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Number of committed document changes
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Selected object, if any
    #[inline]
    #[must_use]
    pub fn selection(&self) -> Option<&ObjectId> {
        self.selection.as_ref()
    }

    /// Select an object for the next slot assignment
    ///
    /// # Errors
    /// Returns `ModelError::UnknownObject` if `id` is not in the document
    pub fn select_object(&mut self, id: ObjectId) -> Result<(), EditorError> {
        if !self.document.contains_object(&id) {
            return Err(ModelError::UnknownObject(id).into());
        }
        tracing::debug!(object = %id, "object selected");
        self.selection = Some(id);
        Ok(())
    }

    /// Drop the selection (click outside any object)
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Assign the selected object into `combinate[recipe][slot]`
    ///
    /// # Workflow
    /// 1. No selection: no-op
    /// 2. Write into a copy of the document
    /// 3. Recipe still incomplete: commit, clear selection
    /// 4. Complete: check invariants, notify once per violation, then commit
    ///    or discard according to [`CommitPolicy`]
    ///
    /// # Errors
    /// Returns `ModelError::RecipeOutOfRange` for a bad recipe index; the
    /// session is unchanged.
    pub fn assign_slot(
        &mut self,
        recipe: usize,
        slot: RecipeSlot,
    ) -> Result<SlotAssignment, EditorError> {
        let Some(selected) = self.selection.clone() else {
            tracing::debug!(recipe, %slot, "slot clicked without selection");
            return Ok(SlotAssignment::NoSelection);
        };

        let next = self.document.with_recipe_slot(recipe, slot, selected)?;
        let complete = next
            .recipes()
            .get(recipe)
            .is_some_and(Recipe::is_complete);

        if !complete {
            self.commit(next);
            self.selection = None;
            return Ok(SlotAssignment::Incomplete);
        }

        let violations = validation::check_recipe(next.recipes(), recipe);
        for violation in &violations {
            tracing::warn!(%violation, "recipe invariant violated");
            self.notifier.alert(violation.notice());
        }

        let committed =
            violations.is_empty() || self.config.commit_policy == CommitPolicy::CommitFlagged;
        if committed {
            self.commit(next);
            self.selection = None;
        } else {
            tracing::info!(recipe, %slot, "invalid recipe write discarded");
        }

        Ok(SlotAssignment::Complete {
            violations,
            committed,
        })
    }

    /// [`assign_slot`](Self::assign_slot) with a raw slot index
    ///
    /// # Errors
    /// Returns `ModelError::InvalidSlot` for indices outside `0..3`
    pub fn assign_slot_index(
        &mut self,
        recipe: usize,
        slot: usize,
    ) -> Result<SlotAssignment, EditorError> {
        let slot = RecipeSlot::try_from(slot)?;
        self.assign_slot(recipe, slot)
    }

    /// Add an empty recipe; returns its index
    pub fn add_recipe(&mut self) -> usize {
        let index = match self.config.recipe_insertion {
            RecipeInsertion::Front => 0,
            RecipeInsertion::Back => self.document.recipes().len(),
        };
        let next = self.document.with_recipe_at(index, Recipe::empty());
        self.commit(next);
        index
    }

    /// Violations held by the current document
    #[must_use]
    pub fn violations(&self) -> Vec<RecipeViolation> {
        validation::audit(self.document.recipes())
    }

    /// Open the new-object modal for `group`
    ///
    /// Replaces any open draft. The returned sink feeds the draft image.
    pub fn open_new_object(&mut self, group: ObjectGroup) -> DraftImageSink {
        let draft = NewObjectDraft::new(group);
        let sink = draft.image_sink();
        self.draft = Some(draft);
        tracing::debug!(%group, "new object modal opened");
        sink
    }

    /// Close the modal, discarding the draft
    pub fn close_new_object(&mut self) {
        self.draft = None;
    }

    /// Open draft, if any
    #[inline]
    #[must_use]
    pub fn draft(&self) -> Option<&NewObjectDraft> {
        self.draft.as_ref()
    }

    /// Set the draft's name
    ///
    /// # Errors
    /// Returns `EditorError::NoDraft` if the modal is closed
    pub fn set_draft_name(&mut self, name: impl Into<String>) -> Result<(), EditorError> {
        let draft = self.draft.as_mut().ok_or(EditorError::NoDraft)?;
        draft.name = name.into();
        Ok(())
    }

    /// Set the draft's image directly
    ///
    /// # Errors
    /// Returns `EditorError::NoDraft` if the modal is closed
    pub fn set_draft_image(&mut self, image: ImageData) -> Result<(), EditorError> {
        let draft = self.draft.as_ref().ok_or(EditorError::NoDraft)?;
        draft.image_sink().set_data(image);
        Ok(())
    }

    /// Create the drafted object and close the modal
    ///
    /// The object gets the smallest free numeric id and the placeholder
    /// image when none was chosen.
    ///
    /// # Errors
    /// - `EditorError::NoDraft` if the modal is closed
    /// - `ModelError::EmptyName` if the name is blank; the draft stays open
    pub fn commit_new_object(&mut self) -> Result<ObjectId, EditorError> {
        let draft = self.draft.as_ref().ok_or(EditorError::NoDraft)?;

        let id = self.document.next_object_id();
        let img = draft.image().map_or_else(
            || ImageRef::remote(self.config.placeholder_image.clone()),
            ImageRef::from,
        );
        let object = GameObject::new(id.clone(), draft.name.trim(), img);
        let next = self.document.with_object(object, draft.group)?;

        tracing::info!(object = %id, group = %draft.group, "object created");
        self.commit(next);
        self.draft = None;
        Ok(id)
    }

    /// Palette entries for `group`
    #[must_use]
    pub fn palette(&self, group: ObjectGroup) -> Vec<PaletteEntry> {
        view::palette(&self.document, group, self.selection.as_ref())
    }

    /// Recipe rows with resolved names and current violations
    #[must_use]
    pub fn recipe_rows(&self) -> Vec<RecipeRow> {
        view::recipe_rows(&self.document)
    }

    fn commit(&mut self, next: PuzzleDocument) {
        self.document = next;
        self.revision += 1;
        tracing::info!(revision = self.revision, "document updated");
    }
}
