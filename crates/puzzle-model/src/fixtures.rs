//! Sample documents
//!
//! Hosts without a loader inject one of these as the session's initial
//! document.

use crate::document::PuzzleDocument;
use crate::id::ObjectId;
use crate::image::ImageRef;
use crate::object::{GameObject, ObjectGroup};
use crate::recipe::Recipe;

/// Placeholder picture used until an object gets its own image
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

const WATER_IMG: &str = "https://img1.daumcdn.net/thumb/R1280x0/?scode=mtistory2&fname=https%3A%2F%2Ft1.daumcdn.net%2Fcfile%2Ftistory%2F244B0939537624F506";
const FIRE_IMG: &str = "https://media.istockphoto.com/id/1323529010/ko/vector/fire.jpg?s=612x612";
const STEAM_IMG: &str = "https://previews.123rf.com/images/rigamondis/rigamondis1111/rigamondis111100015/11317989.jpg";

/// "Strange laboratory": water + fire -> steam, plus a hidden element
///
/// Objects `0` water, `1` fire (start palette), `2` steam, `3` hidden
/// element (combination palette), one recipe `0 + 1 -> 2`.
#[must_use]
pub fn sample_document() -> PuzzleDocument {
    let objects = [
        ("0", "Water", WATER_IMG, ObjectGroup::Start),
        ("1", "Fire", FIRE_IMG, ObjectGroup::Start),
        ("2", "Steam", STEAM_IMG, ObjectGroup::Combine),
        ("3", "Hidden Element", STEAM_IMG, ObjectGroup::Combine),
    ];

    let doc = objects.into_iter().fold(
        PuzzleDocument::new("0", "Strange Laboratory", "0")
            .with_background("/image.jpg")
            .with_sound("url"),
        |doc, (id, name, img, group)| {
            let object = GameObject::new(ObjectId::from_static(id), name, ImageRef::remote(img));
            doc.push_object(object, group)
        },
    );

    doc.with_recipe_at(
        0,
        Recipe::new(
            ObjectId::from_static("0"),
            ObjectId::from_static("1"),
            ObjectId::from_static("2"),
        ),
    )
}
