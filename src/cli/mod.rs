//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, CourseAction, NoteAction, TextAction, TextbookAction};
pub use output::{
    format_course_list, format_note_list, format_reading_view, format_text_list,
    format_textbook_list,
};
