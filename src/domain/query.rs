//! Read-only relational views over repository contents
//!
//! All filters compare integer foreign keys with exact equality. An empty
//! result is a normal outcome, never an error.

use crate::domain::{Note, OriginalText, Textbook};

/// Textbooks belonging to a course, in list order
pub fn textbooks_for_course(textbooks: &[Textbook], course_id: u64) -> Vec<&Textbook> {
    textbooks
        .iter()
        .filter(|tb| tb.course_id == course_id)
        .collect()
}

/// Text chunks for a course/textbook pair, sorted ascending by id
pub fn texts_for_course_and_textbook(
    texts: &[OriginalText],
    course_id: u64,
    textbook_id: u64,
) -> Vec<&OriginalText> {
    let mut relevant: Vec<&OriginalText> = texts
        .iter()
        .filter(|t| t.course_id == course_id && t.textbook_id == textbook_id)
        .collect();
    relevant.sort_by_key(|t| t.id);
    relevant
}

/// Notes attached to one text chunk, oldest first.
///
/// Notes added within the same second keep their list order.
pub fn notes_for_text(
    notes: &[Note],
    course_id: u64,
    textbook_id: u64,
    original_text_input_id: u64,
) -> Vec<&Note> {
    let mut related: Vec<&Note> = notes
        .iter()
        .filter(|n| {
            n.course_id == course_id
                && n.textbook_id == textbook_id
                && n.original_text_input_id == original_text_input_id
        })
        .collect();
    // sort_by_key is stable
    related.sort_by_key(|n| n.note_added_time);
    related
}
