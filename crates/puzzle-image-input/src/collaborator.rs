//! External collaborators of the selector
//!
//! The selector never validates or resizes images itself. Hosts supply:
//! - [`ImageValidator`]: is a URL a usable image?
//! - [`ImageTransform`]: validate + resize a local file
//! - [`ImageSink`]: the parent form receiving the normalized result

use async_trait::async_trait;
use puzzle_model::{ImageBlob, ImageData};

/// A file picked by the user, before processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImageFile {
    /// Original file name
    pub name: String,
    /// Declared MIME type
    pub mime: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl RawImageFile {
    /// Create raw file
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

/// Output of [`ImageTransform::transform`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedImage {
    /// Processed payload to upload
    pub blob: ImageBlob,
    /// URL the processed image can be displayed from
    pub url: String,
}

/// Failure reported by an [`ImageTransform`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// File is not an image the transform accepts
    #[error("unsupported image type: {0}")]
    UnsupportedType(String),

    /// Decoding or resizing failed
    #[error("image processing failed: {0}")]
    Processing(String),
}

/// Checks whether a URL points at a usable image
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageValidator: Send + Sync {
    /// Single-shot check; no retries
    async fn is_usable(&self, url: &str) -> bool;
}

/// Validates and resizes a local image file
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageTransform: Send + Sync {
    /// Process `file` into an uploadable payload plus display URL
    ///
    /// # Errors
    /// Returns [`TransformError`] if the file cannot be processed
    async fn transform(&self, file: RawImageFile) -> Result<TransformedImage, TransformError>;
}

/// Parent form callback
#[cfg_attr(test, mockall::automock)]
pub trait ImageSink: Send + Sync {
    /// Receive either `{url}` or `{url, form}`
    fn set_data(&self, data: ImageData);
}
