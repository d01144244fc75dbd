//! Image Input Selector
//!
//! Produces one normalized [`ImageData`] for a parent form, from either a
//! local file or a remote URL.
//!
//! # Concurrency
//! All methods take `&self`. External calls are awaited without holding the
//! state lock, so a second interaction may start before the first resolves;
//! whichever completes last wins. There is no queuing or cancellation.

use crate::collaborator::{ImageSink, ImageTransform, ImageValidator, RawImageFile};
use crate::error::ImageInputError;
use parking_lot::Mutex;
use puzzle_model::{ImageData, MultipartForm};
use std::fmt;
use std::sync::Arc;

/// Key that commits the typed URL
pub const COMMIT_KEY: &str = "Enter";

/// Where the image comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SourceMode {
    /// Local file upload
    #[default]
    File,
    /// Typed URL
    Url,
}

/// Result of committing a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlOutcome {
    /// Validator accepted; parent received `{url}`
    Accepted(String),
    /// Validator rejected; display reverted to the default image
    Rejected,
}

/// Result of a file selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Event carried no file
    NoFile,
    /// Parent received `{url, form}`
    Uploaded { url: String },
}

/// Observable selector state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorSnapshot {
    /// Active mode
    pub mode: SourceMode,
    /// Text in the URL field
    pub url_input: String,
    /// URL currently displayed
    pub display_url: String,
}

/// File-or-URL image control
pub struct ImageInputSelector {
    title: String,
    default_img: String,
    validator: Arc<dyn ImageValidator>,
    transform: Arc<dyn ImageTransform>,
    sink: Arc<dyn ImageSink>,
    state: Mutex<SelectorSnapshot>,
}

impl fmt::Debug for ImageInputSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageInputSelector")
            .field("title", &self.title)
            .field("default_img", &self.default_img)
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

impl ImageInputSelector {
    /// Create selector showing `default_img`, in file mode
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        default_img: impl Into<String>,
        validator: Arc<dyn ImageValidator>,
        transform: Arc<dyn ImageTransform>,
        sink: Arc<dyn ImageSink>,
    ) -> Self {
        let default_img = default_img.into();
        Self {
            title: title.into(),
            state: Mutex::new(SelectorSnapshot {
                mode: SourceMode::default(),
                url_input: String::new(),
                display_url: default_img.clone(),
            }),
            default_img,
            validator,
            transform,
            sink,
        }
    }

    /// Control title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Image shown before any successful interaction
    #[inline]
    #[must_use]
    pub fn default_image(&self) -> &str {
        &self.default_img
    }

    /// Current state
    #[must_use]
    pub fn snapshot(&self) -> SelectorSnapshot {
        self.state.lock().clone()
    }

    /// Active mode
    #[must_use]
    pub fn mode(&self) -> SourceMode {
        self.state.lock().mode
    }

    /// URL currently displayed
    #[must_use]
    pub fn display_url(&self) -> String {
        self.state.lock().display_url.clone()
    }

    /// Text in the URL field
    #[must_use]
    pub fn url_input(&self) -> String {
        self.state.lock().url_input.clone()
    }

    /// Switch between file and URL entry
    pub fn set_mode(&self, mode: SourceMode) {
        self.state.lock().mode = mode;
    }

    /// Update the typed URL without committing it
    pub fn set_url_input(&self, text: impl Into<String>) {
        self.state.lock().url_input = text.into();
    }

    /// Key press in the URL field; commits on [`COMMIT_KEY`]
    ///
    /// The URL field only exists in [`SourceMode::Url`]; in file mode this
    /// returns `None` without touching the validator.
    pub async fn key_down(&self, key: &str) -> Option<UrlOutcome> {
        if key != COMMIT_KEY {
            return None;
        }
        let url = self.typed_url()?;
        Some(self.submit_url(&url).await)
    }

    /// URL field lost focus; commits the typed text in URL mode
    pub async fn blur(&self) -> Option<UrlOutcome> {
        let url = self.typed_url()?;
        Some(self.submit_url(&url).await)
    }

    fn typed_url(&self) -> Option<String> {
        let state = self.state.lock();
        (state.mode == SourceMode::Url).then(|| state.url_input.clone())
    }

    /// Validate `url` and report it to the parent if usable
    ///
    /// Commits regardless of mode; field events go through [`Self::key_down`]
    /// and [`Self::blur`]. A rejected URL never reaches the parent: the typed
    /// text is cleared, the default image is displayed and reported instead.
    pub async fn submit_url(&self, url: &str) -> UrlOutcome {
        let usable = self.validator.is_usable(url).await;

        if usable {
            self.state.lock().display_url = url.to_string();
            tracing::debug!(title = %self.title, url, "image url accepted");
            self.sink.set_data(ImageData::url(url));
            UrlOutcome::Accepted(url.to_string())
        } else {
            {
                let mut state = self.state.lock();
                state.url_input.clear();
                state.display_url = self.default_image().to_string();
            }
            tracing::warn!(title = %self.title, url, "image url rejected, reverting to default");
            self.sink.set_data(ImageData::url(self.default_image()));
            UrlOutcome::Rejected
        }
    }

    /// Handle a file-input change event
    ///
    /// Only the first file is used. A missing or empty file list is a no-op.
    ///
    /// # Errors
    /// Returns [`ImageInputError::Transform`] if processing fails; the
    /// selector state and parent are left untouched.
    pub async fn select_files(
        &self,
        files: Option<Vec<RawImageFile>>,
    ) -> Result<FileOutcome, ImageInputError> {
        let Some(file) = files.and_then(|files| files.into_iter().next()) else {
            tracing::debug!(title = %self.title, "file event without files");
            return Ok(FileOutcome::NoFile);
        };

        let name = file.name.clone();
        let processed = self.transform.transform(file).await.map_err(|e| {
            tracing::warn!(title = %self.title, file = %name, error = %e, "image transform failed");
            ImageInputError::from(e)
        })?;

        {
            let mut state = self.state.lock();
            state.display_url.clone_from(&processed.url);
            state.url_input.clone_from(&processed.url);
        }
        tracing::debug!(
            title = %self.title,
            file = %name,
            bytes = processed.blob.len(),
            "image uploaded"
        );

        let form = MultipartForm::upload(processed.blob);
        self.sink.set_data(ImageData::upload(processed.url.clone(), form));
        Ok(FileOutcome::Uploaded { url: processed.url })
    }

    /// Id of the hidden file input element
    #[must_use]
    pub fn file_input_id(&self) -> String {
        format!("modalInput{}", self.title())
    }

    /// Id of the "FILE" radio option
    #[must_use]
    pub fn file_option_id(&self) -> String {
        format!("optionFile{}", self.title())
    }

    /// Id of the "URL" radio option
    #[must_use]
    pub fn url_option_id(&self) -> String {
        format!("optionURL{}", self.title())
    }
}
