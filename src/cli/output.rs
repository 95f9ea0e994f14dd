//! Output formatting utilities

use crate::application::TextWithNotes;
use crate::domain::{Course, Note, OriginalText, Textbook};
use chrono::{DateTime, Local};

/// Render unix seconds as a local date and time
pub fn format_timestamp(secs: i64) -> String {
    match DateTime::from_timestamp(secs, 0) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => secs.to_string(),
    }
}

pub fn format_course_list(courses: &[Course]) -> String {
    if courses.is_empty() {
        return "No courses found".to_string();
    }

    let mut output = String::new();
    for course in courses {
        output.push_str(&format!("{:>4}  {}\n", course.id, course.course_name));
    }
    output
}

pub fn format_textbook_list(textbooks: &[&Textbook]) -> String {
    if textbooks.is_empty() {
        return "No textbooks found".to_string();
    }

    let mut output = String::new();
    for textbook in textbooks {
        output.push_str(&format!("{:>4}  {}\n", textbook.id, textbook.textbook_name));
    }
    output
}

pub fn format_text_list(texts: &[&OriginalText]) -> String {
    if texts.is_empty() {
        return "No texts found".to_string();
    }

    let mut output = String::new();
    for text in texts {
        output.push_str(&format!("{:>4}  {}\n", text.id, text.original_text));
    }
    output
}

pub fn format_note_list(notes: &[&Note]) -> String {
    if notes.is_empty() {
        return "No notes yet".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!(
            "{}  {}\n",
            format_timestamp(note.note_added_time),
            note.note_text
        ));
    }
    output
}

/// Text chunks in order, each followed by its notes or a "No notes yet" line
pub fn format_reading_view(view: &[TextWithNotes<'_>]) -> String {
    if view.is_empty() {
        return "No texts found".to_string();
    }

    let mut output = String::new();
    for entry in view {
        output.push_str(&format!("[{}] {}\n", entry.text.id, entry.text.original_text));
        if entry.notes.is_empty() {
            output.push_str("    No notes yet\n");
        }
        for note in &entry.notes {
            output.push_str(&format!(
                "    - {} (at {})\n",
                note.note_text,
                format_timestamp(note.note_added_time)
            ));
        }
    }
    output
}
