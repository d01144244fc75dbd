//! New-object modal state

use parking_lot::Mutex;
use puzzle_image_input::ImageSink;
use puzzle_model::{ImageData, ObjectGroup};
use std::sync::Arc;

/// Image slot of an open modal
///
/// Cloned handles share one slot, so the handle given to an
/// [`ImageInputSelector`](puzzle_image_input::ImageInputSelector) feeds the
/// draft the session commits.
#[derive(Debug, Clone, Default)]
pub struct DraftImageSink {
    latest: Arc<Mutex<Option<ImageData>>>,
}

impl DraftImageSink {
    /// Most recent image reported
    #[must_use]
    pub fn latest(&self) -> Option<ImageData> {
        self.latest.lock().clone()
    }
}

impl ImageSink for DraftImageSink {
    fn set_data(&self, data: ImageData) {
        *self.latest.lock() = Some(data);
    }
}

/// Object being created in the modal
#[derive(Debug, Clone)]
pub struct NewObjectDraft {
    /// Palette the object joins
    pub group: ObjectGroup,
    /// Typed name
    pub name: String,
    image: DraftImageSink,
}

impl NewObjectDraft {
    pub(crate) fn new(group: ObjectGroup) -> Self {
        Self {
            group,
            name: String::new(),
            image: DraftImageSink::default(),
        }
    }

    /// Shared handle to the draft's image slot
    #[inline]
    #[must_use]
    pub fn image_sink(&self) -> DraftImageSink {
        self.image.clone()
    }

    /// Chosen image, if any
    #[inline]
    #[must_use]
    pub fn image(&self) -> Option<ImageData> {
        self.image.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_handles_share_the_slot() {
        let draft = NewObjectDraft::new(ObjectGroup::Combine);
        assert_eq!(draft.image(), None);

        draft.image_sink().set_data(ImageData::url("/a.png"));
        assert_eq!(draft.image(), Some(ImageData::url("/a.png")));

        draft.image_sink().set_data(ImageData::url("/b.png"));
        assert_eq!(draft.image(), Some(ImageData::url("/b.png")));
    }
}
