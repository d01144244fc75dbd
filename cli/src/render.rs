//! Plain-text rendering of editor views

use puzzle_editor::{EditorSession, RecipeRow, SlotAssignment};
use puzzle_model::ObjectGroup;
use std::fmt::Write;

pub(crate) fn session_summary(session: &EditorSession) -> String {
    let doc = session.document();
    let mut out = String::new();
    let _ = writeln!(out, "{} (id {}, maker {})", doc.title, doc.id, doc.maker_id);

    for (label, group) in [("start", ObjectGroup::Start), ("combine", ObjectGroup::Combine)] {
        let _ = writeln!(out, "{label} objects:");
        for entry in session.palette(group) {
            let marker = if entry.selected { "*" } else { " " };
            let _ = writeln!(
                out,
                " {marker} [{}] {} <{}>",
                entry.id,
                entry.name,
                entry.image_url.as_deref().unwrap_or("-")
            );
        }
    }

    let _ = writeln!(out, "recipes:");
    for row in session.recipe_rows() {
        let _ = writeln!(out, "  {}", recipe_row(&row));
    }
    out
}

pub(crate) fn recipe_row(row: &RecipeRow) -> String {
    let [a, b, result] = &row.slots;
    let flag = if row.is_flagged() { "  (!)" } else { "" };
    format!("#{} {} + {} -> {}{flag}", row.index, a.name, b.name, result.name)
}

pub(crate) fn assignment(outcome: &SlotAssignment) -> String {
    match outcome {
        SlotAssignment::NoSelection => "nothing selected".to_string(),
        SlotAssignment::Incomplete => "assigned (recipe incomplete)".to_string(),
        SlotAssignment::Complete {
            violations,
            committed,
        } => {
            let verdict = if *committed { "committed" } else { "rejected" };
            if violations.is_empty() {
                format!("assigned, recipe complete ({verdict})")
            } else {
                format!("assigned with {} violation(s) ({verdict})", violations.len())
            }
        }
    }
}
