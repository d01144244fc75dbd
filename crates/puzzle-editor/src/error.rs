//! Error types for the editor session

use puzzle_model::ModelError;

/// Editor session errors
///
/// Recipe invariant violations are not errors; they are reported through
/// the [`Notifier`](crate::Notifier) and returned in the assignment outcome.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// Document update rejected by the model
    #[error("document error: {0}")]
    Model(#[from] ModelError),

    /// Draft operation without an open new-object modal
    #[error("no new object modal is open")]
    NoDraft,

    /// Configuration could not be parsed
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

impl EditorError {
    /// Check if the error came from user input rather than host misuse
    #[inline]
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Model(ModelError::EmptyName | ModelError::InvalidSlot(_))
        )
    }
}
