//! Entity repositories
//!
//! Each repository owns the in-memory collection for one entity kind and
//! mirrors it to the store on every append. Repositories validate field
//! presence only; whether a referenced parent exists is decided by
//! [`Notebook`](crate::application::Notebook) according to its policy.

use crate::domain::validation::{require_ref, require_text};
use crate::domain::{next_id, Course, Note, OriginalText, Record, Textbook};
use crate::error::{CoursenotesError, Result};
use crate::infrastructure::Store;
use std::rc::Rc;
use tracing::{info, warn};

/// Append-only collection with write-through persistence
pub struct Collection<T: Record, S: Store> {
    records: Vec<T>,
    store: Rc<S>,
}

impl<T: Record, S: Store> Collection<T, S> {
    /// Load the collection's current contents from the store
    pub fn load(store: Rc<S>) -> Self {
        let records = store.load(T::COLLECTION);
        Collection { records, store }
    }

    /// Records in append order, which is also ascending id order
    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn find(&self, id: u64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Allocate an id, append the record built from it, then persist everything.
    ///
    /// If persisting fails the record stays appended in memory and the error
    /// is returned; the stored copy is stale until the next successful persist.
    /// Fails without touching anything when no id is left to allocate.
    fn append(&mut self, build: impl FnOnce(u64) -> T) -> Result<T> {
        let id =
            next_id(&self.records).ok_or(CoursenotesError::IdExhausted(T::COLLECTION))?;
        let record = build(id);
        self.records.push(record.clone());

        if let Err(e) = self.store.persist(T::COLLECTION, &self.records) {
            warn!("Failed to persist {}: {}", T::COLLECTION, e);
            return Err(e);
        }

        info!("Created {} {}", T::KIND, record.id());
        Ok(record)
    }
}

pub struct CourseRepository<S: Store> {
    collection: Collection<Course, S>,
}

impl<S: Store> CourseRepository<S> {
    pub fn load(store: Rc<S>) -> Self {
        CourseRepository {
            collection: Collection::load(store),
        }
    }

    pub fn create(&mut self, course_name: &str) -> Result<Course> {
        let course_name = require_text("courseName", course_name)?;
        self.collection.append(|id| Course { id, course_name })
    }

    pub fn list(&self) -> &[Course] {
        self.collection.list()
    }

    pub fn find(&self, id: u64) -> Option<&Course> {
        self.collection.find(id)
    }
}

pub struct TextbookRepository<S: Store> {
    collection: Collection<Textbook, S>,
}

impl<S: Store> TextbookRepository<S> {
    pub fn load(store: Rc<S>) -> Self {
        TextbookRepository {
            collection: Collection::load(store),
        }
    }

    pub fn create(&mut self, course_id: Option<u64>, textbook_name: &str) -> Result<Textbook> {
        let course_id = require_ref("courseId", course_id)?;
        let textbook_name = require_text("textbookName", textbook_name)?;
        self.collection.append(|id| Textbook {
            id,
            course_id,
            textbook_name,
        })
    }

    pub fn list(&self) -> &[Textbook] {
        self.collection.list()
    }

    pub fn find(&self, id: u64) -> Option<&Textbook> {
        self.collection.find(id)
    }
}

pub struct OriginalTextRepository<S: Store> {
    collection: Collection<OriginalText, S>,
}

impl<S: Store> OriginalTextRepository<S> {
    pub fn load(store: Rc<S>) -> Self {
        OriginalTextRepository {
            collection: Collection::load(store),
        }
    }

    pub fn create(
        &mut self,
        course_id: Option<u64>,
        textbook_id: Option<u64>,
        original_text: &str,
    ) -> Result<OriginalText> {
        let course_id = require_ref("courseId", course_id)?;
        let textbook_id = require_ref("textbookId", textbook_id)?;
        let original_text = require_text("originalText", original_text)?;
        self.collection.append(|id| OriginalText {
            id,
            course_id,
            textbook_id,
            original_text,
        })
    }

    pub fn list(&self) -> &[OriginalText] {
        self.collection.list()
    }

    pub fn find(&self, id: u64) -> Option<&OriginalText> {
        self.collection.find(id)
    }
}

pub struct NoteRepository<S: Store> {
    collection: Collection<Note, S>,
}

impl<S: Store> NoteRepository<S> {
    pub fn load(store: Rc<S>) -> Self {
        NoteRepository {
            collection: Collection::load(store),
        }
    }

    /// Create a note stamped with `note_added_time` (unix seconds)
    pub fn create(
        &mut self,
        course_id: Option<u64>,
        textbook_id: Option<u64>,
        original_text_input_id: Option<u64>,
        note_text: &str,
        note_added_time: i64,
    ) -> Result<Note> {
        let course_id = require_ref("courseId", course_id)?;
        let textbook_id = require_ref("textbookId", textbook_id)?;
        let original_text_input_id = require_ref("originalTextInputId", original_text_input_id)?;
        let note_text = require_text("noteText", note_text)?;
        self.collection.append(|id| Note {
            id,
            course_id,
            textbook_id,
            original_text_input_id,
            note_added_time,
            note_text,
        })
    }

    pub fn list(&self) -> &[Note] {
        self.collection.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;

    #[test]
    fn test_first_course_gets_id_one() {
        let store = Rc::new(MemoryStore::new());
        let mut courses = CourseRepository::load(store.clone());

        let course = courses.create("Algebra").unwrap();

        assert_eq!(
            course,
            Course {
                id: 1,
                course_name: "Algebra".to_string()
            }
        );
        assert_eq!(courses.list(), &[course]);
        assert_eq!(store.persist_calls(), 1);
    }

    #[test]
    fn test_ids_continue_after_gap() {
        let store = Rc::new(MemoryStore::new());
        store.insert_raw(
            "courses",
            r#"[{"id":1,"courseName":"A"},{"id":3,"courseName":"B"}]"#,
        );
        let mut courses = CourseRepository::load(store);

        let course = courses.create("X").unwrap();
        assert_eq!(course.id, 4);
    }

    #[test]
    fn test_ids_strictly_increasing() {
        let store = Rc::new(MemoryStore::new());
        let mut courses = CourseRepository::load(store);

        let ids: Vec<u64> = (0..5)
            .map(|i| courses.create(&format!("course {}", i)).unwrap().id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_course_name_is_trimmed() {
        let store = Rc::new(MemoryStore::new());
        let mut courses = CourseRepository::load(store);

        let course = courses.create("  Physics  ").unwrap();
        assert_eq!(course.course_name, "Physics");
    }

    #[test]
    fn test_blank_course_rejected_without_write() {
        let store = Rc::new(MemoryStore::new());
        let mut courses = CourseRepository::load(store.clone());

        assert!(matches!(
            courses.create("   "),
            Err(CoursenotesError::EmptyField("courseName"))
        ));
        assert!(courses.list().is_empty());
        assert_eq!(store.persist_calls(), 0);
    }

    #[test]
    fn test_textbook_without_course_rejected() {
        let store = Rc::new(MemoryStore::new());
        let mut textbooks = TextbookRepository::load(store.clone());

        assert!(matches!(
            textbooks.create(None, "Calc"),
            Err(CoursenotesError::MissingReference("courseId"))
        ));
        assert!(textbooks.list().is_empty());
        assert_eq!(store.persist_calls(), 0);
    }

    #[test]
    fn test_textbook_parent_existence_not_checked() {
        let store = Rc::new(MemoryStore::new());
        let mut textbooks = TextbookRepository::load(store);

        let textbook = textbooks.create(Some(42), "Calc").unwrap();
        assert_eq!(textbook.course_id, 42);
    }

    #[test]
    fn test_original_text_checks_keys_before_text() {
        let store = Rc::new(MemoryStore::new());
        let mut texts = OriginalTextRepository::load(store);

        assert!(matches!(
            texts.create(Some(1), None, ""),
            Err(CoursenotesError::MissingReference("textbookId"))
        ));
        assert!(matches!(
            texts.create(Some(1), Some(1), " "),
            Err(CoursenotesError::EmptyField("originalText"))
        ));
    }

    #[test]
    fn test_note_keeps_given_time() {
        let store = Rc::new(MemoryStore::new());
        let mut notes = NoteRepository::load(store);

        let note = notes
            .create(Some(1), Some(2), Some(3), " key idea ", 1_700_000_000)
            .unwrap();
        assert_eq!(note.id, 1);
        assert_eq!(note.original_text_input_id, 3);
        assert_eq!(note.note_added_time, 1_700_000_000);
        assert_eq!(note.note_text, "key idea");
    }

    #[test]
    fn test_note_requires_text_reference() {
        let store = Rc::new(MemoryStore::new());
        let mut notes = NoteRepository::load(store);

        assert!(matches!(
            notes.create(Some(1), Some(2), Some(0), "x", 0),
            Err(CoursenotesError::MissingReference("originalTextInputId"))
        ));
    }

    #[test]
    fn test_persist_failure_keeps_memory_append() {
        let store = Rc::new(MemoryStore::new());
        let mut courses = CourseRepository::load(store.clone());
        store.set_simulate_write_error(true);

        assert!(matches!(courses.create("Algebra"), Err(CoursenotesError::Io(_))));
        assert_eq!(courses.list().len(), 1);
        assert!(store.raw("courses").is_none());

        // Next successful write catches the store up
        store.set_simulate_write_error(false);
        let course = courses.create("Biology").unwrap();
        assert_eq!(course.id, 2);
        let stored: Vec<Course> = store.load("courses");
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn test_exhausted_ids_reject_create_without_write() {
        let store = Rc::new(MemoryStore::new());
        store.insert_raw("courses", r#"[{"id":18446744073709551615,"courseName":"A"}]"#);
        let mut courses = CourseRepository::load(store.clone());

        assert!(matches!(
            courses.create("X"),
            Err(CoursenotesError::IdExhausted("courses"))
        ));
        assert_eq!(courses.list().len(), 1);
        assert_eq!(store.persist_calls(), 0);
    }

    #[test]
    fn test_find() {
        let store = Rc::new(MemoryStore::new());
        let mut courses = CourseRepository::load(store);
        courses.create("Algebra").unwrap();

        assert_eq!(courses.find(1).map(|c| c.course_name.as_str()), Some("Algebra"));
        assert!(courses.find(2).is_none());
    }
}
