//! Recipes: `[ingredient, ingredient, result]`

use crate::error::ModelError;
use crate::id::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot position within a [`Recipe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecipeSlot {
    /// First ingredient (index 0)
    First,
    /// Second ingredient (index 1)
    Second,
    /// Result (index 2)
    Result,
}

impl RecipeSlot {
    /// All slots in index order
    pub const ALL: [RecipeSlot; 3] = [Self::First, Self::Second, Self::Result];

    /// Tuple index of this slot
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Result => 2,
        }
    }

    /// Check if slot holds an ingredient
    #[inline]
    #[must_use]
    pub fn is_ingredient(self) -> bool {
        !matches!(self, Self::Result)
    }
}

impl TryFrom<usize> for RecipeSlot {
    type Error = ModelError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::First),
            1 => Ok(Self::Second),
            2 => Ok(Self::Result),
            other => Err(ModelError::InvalidSlot(other)),
        }
    }
}

impl fmt::Display for RecipeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Fixed-length recipe tuple; `None` marks an unassigned slot
///
/// Serialized as three strings with `""` for unassigned slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[String; 3]", into = "[String; 3]")]
pub struct Recipe {
    slots: [Option<ObjectId>; 3],
}

impl Recipe {
    /// Recipe with every slot unassigned
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fully assigned recipe `a + b -> result`
    #[inline]
    #[must_use]
    pub fn new(a: ObjectId, b: ObjectId, result: ObjectId) -> Self {
        Self {
            slots: [Some(a), Some(b), Some(result)],
        }
    }

    /// Value in `slot`
    #[inline]
    #[must_use]
    pub fn get(&self, slot: RecipeSlot) -> Option<&ObjectId> {
        self.slots[slot.index()].as_ref()
    }

    /// Copy with `slot` set to `id`
    #[must_use]
    pub fn with_slot(&self, slot: RecipeSlot, id: ObjectId) -> Self {
        let mut next = self.clone();
        next.slots[slot.index()] = Some(id);
        next
    }

    /// Ingredient slots (0 and 1)
    #[inline]
    #[must_use]
    pub fn ingredients(&self) -> (Option<&ObjectId>, Option<&ObjectId>) {
        (self.slots[0].as_ref(), self.slots[1].as_ref())
    }

    /// Result slot (2)
    #[inline]
    #[must_use]
    pub fn result(&self) -> Option<&ObjectId> {
        self.slots[2].as_ref()
    }

    /// Check if every slot is assigned
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Check if the result equals one of the ingredients
    ///
    /// Only meaningful for complete recipes; unassigned slots never match.
    #[must_use]
    pub fn produces_itself(&self) -> bool {
        match self.result() {
            Some(result) => {
                let (a, b) = self.ingredients();
                a == Some(result) || b == Some(result)
            }
            None => false,
        }
    }

    /// Check if both recipes use the same unordered ingredient pair
    #[must_use]
    pub fn same_ingredients(&self, other: &Recipe) -> bool {
        let (a, b) = self.ingredients();
        let (c, d) = other.ingredients();
        (a == c && b == d) || (a == d && b == c)
    }
}

impl From<[String; 3]> for Recipe {
    fn from(raw: [String; 3]) -> Self {
        Self {
            slots: raw.map(|s| ObjectId::new(s).ok()),
        }
    }
}

impl From<Recipe> for [String; 3] {
    fn from(recipe: Recipe) -> Self {
        recipe
            .slots
            .map(|slot| slot.map(String::from).unwrap_or_default())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |slot: RecipeSlot| self.get(slot).map_or("_", ObjectId::as_str);
        write!(
            f,
            "{} + {} -> {}",
            show(RecipeSlot::First),
            show(RecipeSlot::Second),
            show(RecipeSlot::Result)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ObjectId {
        ObjectId::new(s).unwrap()
    }

    #[test]
    fn slot_conversion() {
        assert_eq!(RecipeSlot::try_from(0), Ok(RecipeSlot::First));
        assert_eq!(RecipeSlot::try_from(2), Ok(RecipeSlot::Result));
        assert_eq!(RecipeSlot::try_from(3), Err(ModelError::InvalidSlot(3)));
        assert!(RecipeSlot::Second.is_ingredient());
        assert!(!RecipeSlot::Result.is_ingredient());
    }

    #[test]
    fn with_slot_leaves_original() {
        let empty = Recipe::empty();
        let filled = empty.with_slot(RecipeSlot::Second, id("1"));
        assert_eq!(empty.get(RecipeSlot::Second), None);
        assert_eq!(filled.get(RecipeSlot::Second), Some(&id("1")));
        assert!(!filled.is_complete());
    }

    #[test]
    fn self_production() {
        assert!(Recipe::new(id("0"), id("1"), id("0")).produces_itself());
        assert!(Recipe::new(id("0"), id("1"), id("1")).produces_itself());
        assert!(!Recipe::new(id("0"), id("1"), id("2")).produces_itself());
        assert!(!Recipe::empty().produces_itself());
    }

    #[test]
    fn unordered_ingredients() {
        let ab = Recipe::new(id("a"), id("b"), id("x"));
        let ba = Recipe::new(id("b"), id("a"), id("y"));
        let ac = Recipe::new(id("a"), id("c"), id("x"));
        assert!(ab.same_ingredients(&ba));
        assert!(!ab.same_ingredients(&ac));
    }

    #[test]
    fn serialized_as_string_triple() {
        let recipe = Recipe::empty().with_slot(RecipeSlot::First, id("0"));
        let json = serde_json::to_string(&recipe).unwrap();
        assert_eq!(json, r#"["0","",""]"#);
        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recipe);
    }

    #[test]
    fn display() {
        let recipe = Recipe::empty().with_slot(RecipeSlot::Result, id("2"));
        assert_eq!(recipe.to_string(), "_ + _ -> 2");
    }
}
