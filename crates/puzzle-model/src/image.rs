//! Image payloads and references
//!
//! Provides the parent-form contract ([`ImageData`]) and the reference a
//! [`GameObject`](crate::GameObject) holds for its picture.

use serde::{Deserialize, Serialize};

/// Multipart field name an uploaded image is submitted under
pub const UPLOAD_FIELD: &str = "file";

/// Processed binary image, ready for upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBlob {
    /// Encoded image bytes
    pub bytes: Vec<u8>,
    /// MIME type of `bytes`
    pub mime: String,
}

impl ImageBlob {
    /// Create blob
    #[inline]
    #[must_use]
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            mime: mime.into(),
        }
    }

    /// Payload size in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if payload is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Submittable multipart form carrying binary fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipartForm {
    fields: Vec<(String, ImageBlob)>,
}

impl MultipartForm {
    /// Empty form
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form holding a single upload under [`UPLOAD_FIELD`]
    #[must_use]
    pub fn upload(blob: ImageBlob) -> Self {
        let mut form = Self::new();
        form.append(UPLOAD_FIELD, blob);
        form
    }

    /// Append a field; repeated names are kept in order
    pub fn append(&mut self, name: impl Into<String>, blob: ImageBlob) {
        self.fields.push((name.into(), blob));
    }

    /// First value for `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ImageBlob> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, blob)| blob)
    }

    /// Number of fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if form has no fields
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Normalized image descriptor reported to a parent form
///
/// `form` is present only when the image came from a local upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    /// Display URL
    pub url: String,
    /// Upload payload, if any
    pub form: Option<MultipartForm>,
}

impl ImageData {
    /// Remote image, no upload
    #[inline]
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            form: None,
        }
    }

    /// Uploaded image with its display URL
    #[inline]
    #[must_use]
    pub fn upload(url: impl Into<String>, form: MultipartForm) -> Self {
        Self {
            url: url.into(),
            form: Some(form),
        }
    }
}

/// Picture reference held by a game object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageRef {
    /// Image addressed by URL
    Remote { url: String },
    /// Uploaded blob not yet persisted; shown via a local display URL
    Pending {
        display_url: String,
        upload: MultipartForm,
    },
}

impl ImageRef {
    /// Remote reference
    #[inline]
    #[must_use]
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote { url: url.into() }
    }

    /// URL to display
    #[inline]
    #[must_use]
    pub fn display_url(&self) -> &str {
        match self {
            Self::Remote { url } => url,
            Self::Pending { display_url, .. } => display_url,
        }
    }

    /// Check if the image still needs uploading
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}

impl From<ImageData> for ImageRef {
    fn from(data: ImageData) -> Self {
        match data.form {
            Some(upload) => Self::Pending {
                display_url: data.url,
                upload,
            },
            None => Self::Remote { url: data.url },
        }
    }
}
