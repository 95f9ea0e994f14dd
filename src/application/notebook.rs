//! Notebook: the entry points the presentation layer calls
//!
//! A `Notebook` is built once at startup from a store and owns one
//! repository per entity kind. Mutations go through the repositories;
//! reads are projections computed by the query functions.

use crate::application::repositories::{
    CourseRepository, NoteRepository, OriginalTextRepository, TextbookRepository,
};
use crate::domain::validation::{require_ref, require_text};
use crate::domain::{
    notes_for_text, textbooks_for_course, texts_for_course_and_textbook, Course, Note,
    OriginalText, ReferencePolicy, Textbook,
};
use crate::error::{CoursenotesError, Result};
use crate::infrastructure::Store;
use chrono::Utc;
use std::rc::Rc;

/// One text chunk together with its notes, oldest note first
#[derive(Debug, Clone, PartialEq)]
pub struct TextWithNotes<'a> {
    pub text: &'a OriginalText,
    pub notes: Vec<&'a Note>,
}

pub struct Notebook<S: Store> {
    courses: CourseRepository<S>,
    textbooks: TextbookRepository<S>,
    texts: OriginalTextRepository<S>,
    notes: NoteRepository<S>,
    policy: ReferencePolicy,
}

impl<S: Store> Notebook<S> {
    /// Load all four collections from the store
    pub fn open(store: S, policy: ReferencePolicy) -> Self {
        let store = Rc::new(store);
        Notebook {
            courses: CourseRepository::load(Rc::clone(&store)),
            textbooks: TextbookRepository::load(Rc::clone(&store)),
            texts: OriginalTextRepository::load(Rc::clone(&store)),
            notes: NoteRepository::load(store),
            policy,
        }
    }

    pub fn policy(&self) -> ReferencePolicy {
        self.policy
    }

    pub fn create_course(&mut self, course_name: &str) -> Result<Course> {
        self.courses.create(course_name)
    }

    pub fn create_textbook(
        &mut self,
        course_id: Option<u64>,
        textbook_name: &str,
    ) -> Result<Textbook> {
        if self.policy == ReferencePolicy::Enforce {
            let course_id = require_ref("courseId", course_id)?;
            require_text("textbookName", textbook_name)?;
            self.check_course(course_id)?;
        }
        self.textbooks.create(course_id, textbook_name)
    }

    pub fn create_original_text(
        &mut self,
        course_id: Option<u64>,
        textbook_id: Option<u64>,
        original_text: &str,
    ) -> Result<OriginalText> {
        if self.policy == ReferencePolicy::Enforce {
            let course_id = require_ref("courseId", course_id)?;
            let textbook_id = require_ref("textbookId", textbook_id)?;
            require_text("originalText", original_text)?;
            self.check_textbook(course_id, textbook_id)?;
        }
        self.texts.create(course_id, textbook_id, original_text)
    }

    /// Create a note stamped with the current wall-clock second
    pub fn create_note(
        &mut self,
        course_id: Option<u64>,
        textbook_id: Option<u64>,
        original_text_input_id: Option<u64>,
        note_text: &str,
    ) -> Result<Note> {
        let now = Utc::now().timestamp();
        self.create_note_at(course_id, textbook_id, original_text_input_id, note_text, now)
    }

    /// Create a note with an explicit timestamp in unix seconds
    pub fn create_note_at(
        &mut self,
        course_id: Option<u64>,
        textbook_id: Option<u64>,
        original_text_input_id: Option<u64>,
        note_text: &str,
        note_added_time: i64,
    ) -> Result<Note> {
        if self.policy == ReferencePolicy::Enforce {
            let course_id = require_ref("courseId", course_id)?;
            let textbook_id = require_ref("textbookId", textbook_id)?;
            let text_id = require_ref("originalTextInputId", original_text_input_id)?;
            require_text("noteText", note_text)?;
            self.check_text(course_id, textbook_id, text_id)?;
        }
        self.notes.create(
            course_id,
            textbook_id,
            original_text_input_id,
            note_text,
            note_added_time,
        )
    }

    pub fn list_courses(&self) -> &[Course] {
        self.courses.list()
    }

    pub fn list_textbooks(&self) -> &[Textbook] {
        self.textbooks.list()
    }

    pub fn list_texts(&self) -> &[OriginalText] {
        self.texts.list()
    }

    pub fn list_notes(&self) -> &[Note] {
        self.notes.list()
    }

    pub fn textbooks_for_course(&self, course_id: u64) -> Vec<&Textbook> {
        textbooks_for_course(self.textbooks.list(), course_id)
    }

    pub fn texts_for_course_and_textbook(
        &self,
        course_id: u64,
        textbook_id: u64,
    ) -> Vec<&OriginalText> {
        texts_for_course_and_textbook(self.texts.list(), course_id, textbook_id)
    }

    pub fn notes_for_text(
        &self,
        course_id: u64,
        textbook_id: u64,
        original_text_input_id: u64,
    ) -> Vec<&Note> {
        notes_for_text(
            self.notes.list(),
            course_id,
            textbook_id,
            original_text_input_id,
        )
    }

    /// Every text chunk of a course/textbook pair (id order) with its notes
    pub fn reading_view(&self, course_id: u64, textbook_id: u64) -> Vec<TextWithNotes<'_>> {
        self.texts_for_course_and_textbook(course_id, textbook_id)
            .into_iter()
            .map(|text| TextWithNotes {
                text,
                notes: self.notes_for_text(course_id, textbook_id, text.id),
            })
            .collect()
    }

    fn check_course(&self, course_id: u64) -> Result<()> {
        match self.courses.find(course_id) {
            Some(_) => Ok(()),
            None => Err(CoursenotesError::UnknownReference {
                entity: "Course",
                id: course_id,
            }),
        }
    }

    fn check_textbook(&self, course_id: u64, textbook_id: u64) -> Result<()> {
        self.check_course(course_id)?;

        let textbook =
            self.textbooks
                .find(textbook_id)
                .ok_or(CoursenotesError::UnknownReference {
                    entity: "Textbook",
                    id: textbook_id,
                })?;

        if textbook.course_id != course_id {
            return Err(CoursenotesError::InconsistentReference(format!(
                "textbook {} belongs to course {}, not course {}",
                textbook_id, textbook.course_id, course_id
            )));
        }
        Ok(())
    }

    fn check_text(&self, course_id: u64, textbook_id: u64, text_id: u64) -> Result<()> {
        self.check_textbook(course_id, textbook_id)?;

        let text = self
            .texts
            .find(text_id)
            .ok_or(CoursenotesError::UnknownReference {
                entity: "Text",
                id: text_id,
            })?;

        if text.course_id != course_id || text.textbook_id != textbook_id {
            return Err(CoursenotesError::InconsistentReference(format!(
                "text {} belongs to course {} / textbook {}, not course {} / textbook {}",
                text_id, text.course_id, text.textbook_id, course_id, textbook_id
            )));
        }
        Ok(())
    }
}
