//! Object identifiers

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a [`GameObject`](crate::GameObject), unique within a document
///
/// # Invariants
/// - Never empty. An unassigned recipe slot is `None`, not an empty id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId(String);

impl ObjectId {
    /// Create id from string
    ///
    /// # Errors
    /// Returns [`ModelError::EmptyObjectId`] for `""`
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ModelError::EmptyObjectId);
        }
        Ok(Self(id))
    }

    /// Id from a non-empty literal
    pub(crate) fn from_static(id: &'static str) -> Self {
        debug_assert!(!id.is_empty());
        Self(id.to_string())
    }

    /// Id for a numeric sequence number
    #[inline]
    #[must_use]
    pub fn from_index(n: u64) -> Self {
        Self(n.to_string())
    }

    /// Underlying string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, if the id is a decimal number
    #[inline]
    #[must_use]
    pub fn as_index(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ObjectId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ObjectId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ObjectId> for String {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_rejected() {
        assert_eq!(ObjectId::new(""), Err(ModelError::EmptyObjectId));
        assert!("".parse::<ObjectId>().is_err());
    }

    #[test]
    fn numeric_ids() {
        assert_eq!(ObjectId::from_index(7).as_str(), "7");
        assert_eq!(ObjectId::new("12").unwrap().as_index(), Some(12));
        assert_eq!(ObjectId::new("steam").unwrap().as_index(), None);
    }

    #[test]
    fn serde_rejects_empty() {
        assert!(serde_json::from_str::<ObjectId>("\"\"").is_err());
        let id: ObjectId = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(id.as_str(), "3");
    }
}
