//! Editor configuration
//!
//! Loaded from TOML or built in code:
//!
//! ```toml
//! commit_policy = "reject_invalid"
//! recipe_insertion = "back"
//! placeholder_image = "/img/empty.png"
//! ```

use crate::error::EditorError;
use puzzle_model::fixtures::PLACEHOLDER_IMAGE;
use serde::{Deserialize, Serialize};

/// What a slot assignment does when the completed recipe breaks an invariant
///
/// Both variants raise the same notices. Whether invalid recipes should be
/// committed at all is still undecided, so the choice is explicit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitPolicy {
    /// Commit the write, clear the selection, keep the recipe flagged
    #[default]
    CommitFlagged,
    /// Discard the write and keep the selection
    RejectInvalid,
}

/// Where the add-recipe action places the new empty recipe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeInsertion {
    /// Top of the list
    #[default]
    Front,
    /// Bottom of the list
    Back,
}

/// Editor session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Invalid-recipe handling
    pub commit_policy: CommitPolicy,
    /// New recipe position
    pub recipe_insertion: RecipeInsertion,
    /// Image for new objects created without one
    pub placeholder_image: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            commit_policy: CommitPolicy::default(),
            recipe_insertion: RecipeInsertion::default(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl EditorConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set commit policy
    #[inline]
    #[must_use]
    pub fn with_commit_policy(mut self, policy: CommitPolicy) -> Self {
        self.commit_policy = policy;
        self
    }

    /// Set recipe insertion position
    #[inline]
    #[must_use]
    pub fn with_recipe_insertion(mut self, insertion: RecipeInsertion) -> Self {
        self.recipe_insertion = insertion;
        self
    }

    /// Set placeholder image
    #[inline]
    #[must_use]
    pub fn with_placeholder_image(mut self, url: impl Into<String>) -> Self {
        self.placeholder_image = url.into();
        self
    }

    /// Parse TOML; missing keys take defaults
    ///
    /// # Errors
    /// Returns `EditorError::Config` on malformed TOML or unknown variants
    pub fn from_toml_str(s: &str) -> Result<Self, EditorError> {
        Ok(toml::from_str(s)?)
    }
}
