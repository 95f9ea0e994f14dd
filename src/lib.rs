//! coursenotes - Course reading notes organizer
//!
//! Keeps courses, their textbooks, chunks of original text taken from each
//! textbook and notes attached to those chunks, each kind in its own
//! append-only JSON collection.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::CoursenotesError;
