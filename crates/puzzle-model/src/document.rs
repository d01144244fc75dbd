//! Puzzle documents
//!
//! [`PuzzleDocument`] is immutable from the outside: every update method
//! returns a new document. Lists are persistent vectors, so an update
//! shares structure with its predecessor without aliasing it.

use crate::error::ModelError;
use crate::id::ObjectId;
use crate::object::{GameObject, ObjectGroup};
use crate::recipe::{Recipe, RecipeSlot};
use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name shown for ids that resolve to no object
pub const UNKNOWN_NAME: &str = "?";

/// Document identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The complete puzzle under edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleDocument {
    pub id: DocumentId,
    pub title: String,
    pub maker_id: String,
    objects: Vector<GameObject>,
    start: Vector<ObjectId>,
    combine: Vector<ObjectId>,
    combinate: Vector<Recipe>,
    /// Background image URL
    pub background: String,
    /// Background sound URL
    pub sound: String,
}

impl PuzzleDocument {
    /// Empty document
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        maker_id: impl Into<String>,
    ) -> Self {
        Self {
            id: DocumentId(id.into()),
            title: title.into(),
            maker_id: maker_id.into(),
            objects: Vector::new(),
            start: Vector::new(),
            combine: Vector::new(),
            combinate: Vector::new(),
            background: String::new(),
            sound: String::new(),
        }
    }

    /// Set background image
    #[must_use]
    pub fn with_background(mut self, url: impl Into<String>) -> Self {
        self.background = url.into();
        self
    }

    /// Set background sound
    #[must_use]
    pub fn with_sound(mut self, url: impl Into<String>) -> Self {
        self.sound = url.into();
        self
    }

    /// All objects
    #[inline]
    #[must_use]
    pub fn objects(&self) -> &Vector<GameObject> {
        &self.objects
    }

    /// Ids in the start palette
    #[inline]
    #[must_use]
    pub fn start(&self) -> &Vector<ObjectId> {
        &self.start
    }

    /// Ids in the combination palette
    #[inline]
    #[must_use]
    pub fn combine(&self) -> &Vector<ObjectId> {
        &self.combine
    }

    /// Ids in `group`
    #[inline]
    #[must_use]
    pub fn group(&self, group: ObjectGroup) -> &Vector<ObjectId> {
        match group {
            ObjectGroup::Start => &self.start,
            ObjectGroup::Combine => &self.combine,
        }
    }

    /// Recipe list
    #[inline]
    #[must_use]
    pub fn recipes(&self) -> &Vector<Recipe> {
        &self.combinate
    }

    /// Look up object by id
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&GameObject> {
        self.objects.iter().find(|obj| &obj.id == id)
    }

    /// Check if `id` names an object
    #[inline]
    #[must_use]
    pub fn contains_object(&self, id: &ObjectId) -> bool {
        self.object(id).is_some()
    }

    /// Display name for an optional id; `"?"` when unassigned or unknown
    #[must_use]
    pub fn display_name(&self, id: Option<&ObjectId>) -> &str {
        id.and_then(|id| self.object(id))
            .map_or(UNKNOWN_NAME, |obj| obj.name.as_str())
    }

    /// Display image URL for an optional id
    #[must_use]
    pub fn image_url(&self, id: Option<&ObjectId>) -> Option<&str> {
        id.and_then(|id| self.object(id))
            .map(|obj| obj.img.display_url())
    }

    /// Smallest unused decimal id
    #[must_use]
    pub fn next_object_id(&self) -> ObjectId {
        let mut n = 0u64;
        while self.objects.iter().any(|obj| obj.id.as_index() == Some(n)) {
            n += 1;
        }
        ObjectId::from_index(n)
    }

    /// Copy with `object` appended to the objects list and to `group`
    ///
    /// # Errors
    /// - `ModelError::DuplicateObject` if the id is taken
    /// - `ModelError::EmptyName` if the name is blank
    pub fn with_object(&self, object: GameObject, group: ObjectGroup) -> Result<Self, ModelError> {
        if self.contains_object(&object.id) {
            return Err(ModelError::DuplicateObject(object.id));
        }
        if object.name.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }

        Ok(self.clone().push_object(object, group))
    }

    /// Append without uniqueness checks; callers guarantee a fresh id
    pub(crate) fn push_object(mut self, object: GameObject, group: ObjectGroup) -> Self {
        match group {
            ObjectGroup::Start => self.start.push_back(object.id.clone()),
            ObjectGroup::Combine => self.combine.push_back(object.id.clone()),
        }
        self.objects.push_back(object);
        self
    }

    /// Copy with `recipe` inserted at `position` (clamped to the list length)
    #[must_use]
    pub fn with_recipe_at(&self, position: usize, recipe: Recipe) -> Self {
        let mut next = self.clone();
        let position = position.min(next.combinate.len());
        next.combinate.insert(position, recipe);
        next
    }

    /// Copy with `combinate[index][slot] = id`
    ///
    /// # Errors
    /// Returns `ModelError::RecipeOutOfRange` for a bad index
    pub fn with_recipe_slot(
        &self,
        index: usize,
        slot: RecipeSlot,
        id: ObjectId,
    ) -> Result<Self, ModelError> {
        let recipe = self
            .combinate
            .get(index)
            .ok_or(ModelError::RecipeOutOfRange {
                index,
                len: self.combinate.len(),
            })?
            .with_slot(slot, id);

        let mut next = self.clone();
        next.combinate.set(index, recipe);
        Ok(next)
    }
}
