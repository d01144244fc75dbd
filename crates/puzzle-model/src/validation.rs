//! Recipe invariant checks
//!
//! Two invariants hold for complete recipes:
//! - the result is never one of its own ingredients
//! - no two recipes share the same unordered ingredient pair
//!
//! An incomplete recipe is never checked itself. When a recipe is written,
//! [`check_recipe`] still compares it against every other row, partial ones
//! included; [`audit`] only pairs complete recipes, so a row that is still
//! being filled in never flags its finished neighbours.

use crate::recipe::Recipe;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Notice shown for [`RecipeViolation::SelfProduction`]
pub const SELF_PRODUCTION_NOTICE: &str = "result cannot be an ingredient";

/// Notice shown for [`RecipeViolation::DuplicateIngredients`]
pub const DUPLICATE_NOTICE: &str = "duplicate recipe differing only in ingredient order";

/// A broken recipe invariant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipeViolation {
    /// Result equals an ingredient
    SelfProduction { recipe: usize },
    /// Same ingredient pair as another recipe, in either order
    DuplicateIngredients { recipe: usize, other: usize },
}

impl RecipeViolation {
    /// Index of the recipe the violation was raised for
    #[inline]
    #[must_use]
    pub fn recipe(&self) -> usize {
        match self {
            Self::SelfProduction { recipe } | Self::DuplicateIngredients { recipe, .. } => *recipe,
        }
    }

    /// User-facing notice text
    #[inline]
    #[must_use]
    pub fn notice(&self) -> &'static str {
        match self {
            Self::SelfProduction { .. } => SELF_PRODUCTION_NOTICE,
            Self::DuplicateIngredients { .. } => DUPLICATE_NOTICE,
        }
    }
}

impl fmt::Display for RecipeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfProduction { recipe } => {
                write!(f, "recipe {recipe}: {SELF_PRODUCTION_NOTICE}")
            }
            Self::DuplicateIngredients { recipe, other } => {
                write!(f, "recipe {recipe}: {DUPLICATE_NOTICE} (same as recipe {other})")
            }
        }
    }
}

/// Check the recipe at `index` against its own slots and every other recipe
///
/// Returns nothing when the recipe is incomplete or `index` is out of range.
/// One duplicate violation is reported per matching recipe, complete or not.
///
/// # Performance
/// O(n) over the recipe list
pub fn check_recipe<'a>(
    recipes: impl IntoIterator<Item = &'a Recipe>,
    index: usize,
) -> Vec<RecipeViolation> {
    let recipes: Vec<&Recipe> = recipes.into_iter().collect();
    check_in(&recipes, index, Partners::All)
}

/// Which other recipes a duplicate check compares against
#[derive(Clone, Copy)]
enum Partners {
    All,
    Complete,
}

fn check_in(recipes: &[&Recipe], index: usize, partners: Partners) -> Vec<RecipeViolation> {
    let Some(target) = recipes.get(index) else {
        return Vec::new();
    };
    if !target.is_complete() {
        return Vec::new();
    }

    let mut violations = Vec::new();
    if target.produces_itself() {
        violations.push(RecipeViolation::SelfProduction { recipe: index });
    }

    violations.extend(
        recipes
            .iter()
            .enumerate()
            .filter(|(other, recipe)| *other != index && recipe.same_ingredients(target))
            .filter(|(_, recipe)| matches!(partners, Partners::All) || recipe.is_complete())
            .map(|(other, _)| RecipeViolation::DuplicateIngredients {
                recipe: index,
                other,
            }),
    );
    violations
}

/// Every violation across the recipe list, in recipe order
///
/// Only complete recipes are paired, so a duplicated pair is always reported
/// from both sides.
pub fn audit<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Vec<RecipeViolation> {
    let recipes: Vec<&Recipe> = recipes.into_iter().collect();
    (0..recipes.len())
        .flat_map(|index| check_in(&recipes, index, Partners::Complete))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ObjectId;
    use crate::recipe::RecipeSlot;
    use proptest::prelude::*;

    fn id(s: &str) -> ObjectId {
        ObjectId::new(s).unwrap()
    }

    fn recipe(a: &str, b: &str, r: &str) -> Recipe {
        Recipe::new(id(a), id(b), id(r))
    }

    #[test]
    fn incomplete_recipe_never_flags() {
        let partial = Recipe::empty()
            .with_slot(RecipeSlot::First, id("0"))
            .with_slot(RecipeSlot::Result, id("0"));
        let recipes = vec![partial, recipe("0", "1", "2")];
        assert!(check_recipe(&recipes, 0).is_empty());
    }

    #[test]
    fn out_of_range_is_empty() {
        let recipes = vec![recipe("0", "1", "2")];
        assert!(check_recipe(&recipes, 5).is_empty());
    }

    #[test]
    fn self_production_on_either_ingredient() {
        for r in ["0", "1"] {
            let recipes = vec![recipe("0", "1", r)];
            assert_eq!(
                check_recipe(&recipes, 0),
                vec![RecipeViolation::SelfProduction { recipe: 0 }]
            );
        }
    }

    #[test]
    fn mirrored_duplicate_flagged() {
        let recipes = vec![recipe("a", "b", "x"), recipe("b", "a", "y")];
        assert_eq!(
            check_recipe(&recipes, 1),
            vec![RecipeViolation::DuplicateIngredients { recipe: 1, other: 0 }]
        );
    }

    #[test]
    fn different_pair_not_flagged() {
        let recipes = vec![recipe("a", "b", "x"), recipe("a", "c", "x")];
        assert!(check_recipe(&recipes, 1).is_empty());
    }

    #[test]
    fn one_violation_per_duplicate_partner() {
        let recipes = vec![
            recipe("a", "b", "x"),
            recipe("b", "a", "y"),
            recipe("a", "b", "b"),
        ];
        assert_eq!(
            check_recipe(&recipes, 2),
            vec![
                RecipeViolation::SelfProduction { recipe: 2 },
                RecipeViolation::DuplicateIngredients { recipe: 2, other: 0 },
                RecipeViolation::DuplicateIngredients { recipe: 2, other: 1 },
            ]
        );
    }

    #[test]
    fn audit_reports_both_sides() {
        let recipes = vec![
            recipe("a", "b", "x"),
            Recipe::empty(),
            recipe("b", "a", "y"),
        ];
        assert_eq!(
            audit(&recipes),
            vec![
                RecipeViolation::DuplicateIngredients { recipe: 0, other: 2 },
                RecipeViolation::DuplicateIngredients { recipe: 2, other: 0 },
            ]
        );
    }

    #[test]
    fn partial_partner_flags_on_write_but_not_in_audit() {
        let partial = Recipe::empty()
            .with_slot(RecipeSlot::First, id("b"))
            .with_slot(RecipeSlot::Second, id("a"));
        let recipes = vec![recipe("a", "b", "x"), partial];

        assert_eq!(
            check_recipe(&recipes, 0),
            vec![RecipeViolation::DuplicateIngredients { recipe: 0, other: 1 }]
        );
        assert!(audit(&recipes).is_empty());
    }

    #[test]
    fn notices_name_the_violation() {
        assert_eq!(
            RecipeViolation::SelfProduction { recipe: 0 }.notice(),
            SELF_PRODUCTION_NOTICE
        );
        assert_eq!(
            RecipeViolation::DuplicateIngredients { recipe: 0, other: 1 }.notice(),
            DUPLICATE_NOTICE
        );
    }

    proptest! {
        #[test]
        fn duplicate_check_ignores_ingredient_order(
            a in "[a-d]", b in "[a-d]", r1 in "[e-h]", r2 in "[e-h]", swap in any::<bool>()
        ) {
            let second = if swap { recipe(&b, &a, &r2) } else { recipe(&a, &b, &r2) };
            let recipes = vec![recipe(&a, &b, &r1), second];
            prop_assert_eq!(
                check_recipe(&recipes, 1),
                vec![RecipeViolation::DuplicateIngredients { recipe: 1, other: 0 }]
            );
        }

        #[test]
        fn distinct_pairs_never_duplicate(
            a in "[a-d]", b in "[a-d]", c in "[a-d]", d in "[a-d]"
        ) {
            prop_assume!(!((a == c && b == d) || (a == d && b == c)));
            let recipes = vec![recipe(&a, &b, "x"), recipe(&c, &d, "y")];
            prop_assert!(check_recipe(&recipes, 1).is_empty());
        }
    }
}
