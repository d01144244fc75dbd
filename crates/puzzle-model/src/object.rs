//! Game objects

use crate::id::ObjectId;
use crate::image::ImageRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, imaged entity usable as ingredient or result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameObject {
    pub id: ObjectId,
    pub name: String,
    pub img: ImageRef,
}

impl GameObject {
    /// Create object
    #[inline]
    #[must_use]
    pub fn new(id: ObjectId, name: impl Into<String>, img: ImageRef) -> Self {
        Self {
            id,
            name: name.into(),
            img,
        }
    }
}

/// Palette list an object is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectGroup {
    /// Available when the puzzle starts
    Start,
    /// Produced by combining
    Combine,
}

impl fmt::Display for ObjectGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Combine => f.write_str("combine"),
        }
    }
}
