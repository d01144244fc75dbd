//! Testing utilities for the puzzle editor workspace
//!
//! Shared fakes, fixtures, and builders.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use puzzle_editor::{CommitPolicy, EditorConfig, EditorSession, Notifier};
use puzzle_image_input::{
    ImageSink, ImageTransform, ImageValidator, RawImageFile, TransformError, TransformedImage,
};
use puzzle_model::{
    GameObject, ImageBlob, ImageData, ImageRef, ObjectGroup, ObjectId, PuzzleDocument, Recipe,
};
use std::collections::HashSet;
use std::sync::Arc;

pub fn id(s: &str) -> ObjectId {
    ObjectId::new(s).unwrap()
}

pub fn recipe(a: &str, b: &str, result: &str) -> Recipe {
    Recipe::new(id(a), id(b), id(result))
}

/// Document with objects `0..count` in the start palette and the given recipes
pub fn document_with(count: u64, recipes: &[Recipe]) -> PuzzleDocument {
    let doc = (0..count).fold(PuzzleDocument::new("test", "Test Puzzle", "tester"), |doc, n| {
        let object = GameObject::new(
            ObjectId::from_index(n),
            format!("object {n}"),
            ImageRef::remote(format!("/img/{n}.png")),
        );
        doc.with_object(object, ObjectGroup::Start).unwrap()
    });
    recipes
        .iter()
        .enumerate()
        .fold(doc, |doc, (i, r)| doc.with_recipe_at(i, r.clone()))
}

/// Session over `document` with a recording notifier
pub fn session_with(
    document: PuzzleDocument,
    policy: CommitPolicy,
) -> (EditorSession, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let session = EditorSession::new(
        document,
        EditorConfig::new().with_commit_policy(policy),
        notifier.clone(),
    );
    (session, notifier)
}

/// Notifier that remembers every notice
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.notices.lock().push(message.to_string());
    }
}

/// Parent form that remembers every report
#[derive(Debug, Default)]
pub struct RecordingSink {
    received: Mutex<Vec<ImageData>>,
}

impl RecordingSink {
    pub fn received(&self) -> Vec<ImageData> {
        self.received.lock().clone()
    }
}

impl ImageSink for RecordingSink {
    fn set_data(&self, data: ImageData) {
        self.received.lock().push(data);
    }
}

/// Validator accepting a fixed set of URLs
#[derive(Debug, Default)]
pub struct AllowListValidator {
    allowed: HashSet<String>,
    checked: Mutex<Vec<String>>,
}

impl AllowListValidator {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            checked: Mutex::new(Vec::new()),
        }
    }

    pub fn checked(&self) -> Vec<String> {
        self.checked.lock().clone()
    }
}

#[async_trait]
impl ImageValidator for AllowListValidator {
    async fn is_usable(&self, url: &str) -> bool {
        self.checked.lock().push(url.to_string());
        self.allowed.contains(url)
    }
}

/// Transform returning a fixed result, or failing when `output` is `None`
#[derive(Debug)]
pub struct FixedTransform {
    output: Option<TransformedImage>,
    calls: Mutex<Vec<RawImageFile>>,
}

impl FixedTransform {
    pub fn returning(url: &str, bytes: &[u8]) -> Self {
        Self {
            output: Some(TransformedImage {
                blob: ImageBlob::new(bytes.to_vec(), "image/webp"),
                url: url.to_string(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            output: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RawImageFile> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ImageTransform for FixedTransform {
    async fn transform(&self, file: RawImageFile) -> Result<TransformedImage, TransformError> {
        let mime = file.mime.clone();
        self.calls.lock().push(file);
        self.output
            .clone()
            .ok_or(TransformError::UnsupportedType(mime))
    }
}
