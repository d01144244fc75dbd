//! Image Input Selector
//!
//! Reusable form control that lets a user supply an image either by
//! uploading a file or by pasting a URL, and hands a normalized
//! [`ImageData`](puzzle_model::ImageData) to its parent.
//!
//! # Example
//!
//! ```rust,ignore
//! use puzzle_image_input::{ImageInputSelector, SourceMode, COMMIT_KEY};
//!
//! let selector =
//!     ImageInputSelector::new("Background", "/default.png", validator, transform, sink);
//! selector.set_mode(SourceMode::Url);
//! selector.set_url_input("https://example.com/bg.png");
//! selector.key_down(COMMIT_KEY).await;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod collaborator;
mod error;
mod selector;

pub use collaborator::{
    ImageSink, ImageTransform, ImageValidator, RawImageFile, TransformError, TransformedImage,
};
pub use error::ImageInputError;
pub use selector::{
    FileOutcome, ImageInputSelector, SelectorSnapshot, SourceMode, UrlOutcome, COMMIT_KEY,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
