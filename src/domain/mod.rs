//! Domain layer - Entity records, id allocation and relational queries

pub mod entity;
pub mod id;
pub mod policy;
pub mod query;
pub mod validation;

pub use entity::{Course, Note, OriginalText, Record, Textbook};
pub use id::next_id;
pub use policy::ReferencePolicy;
pub use query::{notes_for_text, textbooks_for_course, texts_for_course_and_textbook};
