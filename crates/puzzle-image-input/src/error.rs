//! Error types for the image input selector

use crate::collaborator::TransformError;

/// Errors surfaced by [`ImageInputSelector`](crate::ImageInputSelector)
///
/// Rejected URLs are not errors: the selector recovers locally by
/// reverting to its default image.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageInputError {
    /// The external transform could not process the file
    #[error("file transform failed: {0}")]
    Transform(#[from] TransformError),
}
