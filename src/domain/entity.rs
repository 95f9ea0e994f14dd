//! Entity records: courses, textbooks, original text chunks and notes
//!
//! Every entity is an immutable value record. Field names serialize in
//! camelCase so the on-disk collections keep their established layout.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record stored in its own named collection, keyed by an integer id
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Collection name; the file store appends `.json`
    const COLLECTION: &'static str;

    /// Human-readable entity name used in messages
    const KIND: &'static str;

    fn id(&self) -> u64;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u64,
    pub course_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Textbook {
    pub id: u64,
    pub course_id: u64,
    pub textbook_name: String,
}

/// A chunk of text taken from a textbook.
///
/// Carries the course id alongside the textbook id so it can be filtered
/// without a join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalText {
    pub id: u64,
    pub course_id: u64,
    pub textbook_id: u64,
    pub original_text: String,
}

/// A free-form note attached to one original text chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u64,
    pub course_id: u64,
    pub textbook_id: u64,
    pub original_text_input_id: u64,
    /// Unix seconds at creation
    pub note_added_time: i64,
    pub note_text: String,
}

impl Record for Course {
    const COLLECTION: &'static str = "courses";
    const KIND: &'static str = "Course";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Textbook {
    const COLLECTION: &'static str = "textbooks";
    const KIND: &'static str = "Textbook";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for OriginalText {
    const COLLECTION: &'static str = "originalTextInput";
    const KIND: &'static str = "Text";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Note {
    const COLLECTION: &'static str = "notes";
    const KIND: &'static str = "Note";

    fn id(&self) -> u64 {
        self.id
    }
}
