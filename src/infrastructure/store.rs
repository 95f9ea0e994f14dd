//! Collection persistence
//!
//! A store loads and persists whole named collections. Loading never fails:
//! a missing, unreadable or malformed collection is treated as empty and the
//! problem is logged. Persisting overwrites the full collection.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Durable mirror for named collections
pub trait Store {
    /// Load a collection, degrading to an empty one when nothing usable is stored
    fn load<T: DeserializeOwned>(&self, name: &str) -> Vec<T>;

    /// Overwrite a collection with the given records
    fn persist<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()>;
}

/// One pretty-printed JSON array per collection, stored as `<dir>/<name>.json`.
///
/// Writes go straight to the target file; a crash mid-write can leave it
/// truncated, which the next load reports and treats as empty.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        JsonFileStore { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing a collection
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }
}

impl Store for JsonFileStore {
    fn load<T: DeserializeOwned>(&self, name: &str) -> Vec<T> {
        let path = self.path_for(name);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored {} at {}", name, path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<T>>(&contents) {
            Ok(records) => {
                debug!("Loaded {} {} from {}", records.len(), name, path.display());
                records
            }
            Err(e) => {
                warn!(
                    "Error parsing JSON from {}: {}; starting empty, the next write will replace the file",
                    path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn persist<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.path_for(name);
        let contents = serde_json::to_string_pretty(records)?;
        fs::write(&path, contents)?;

        debug!("Persisted {} {} to {}", records.len(), name, path.display());
        Ok(())
    }
}

/// In-memory store for tests.
///
/// Collections are kept as serialized JSON so loads exercise the same
/// decoding path as the file store. Uses `RefCell`/`Cell` since the data
/// layer is single-threaded.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
    persist_calls: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent persist fail with an IO error
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of persist attempts so far, failed ones included
    pub fn persist_calls(&self) -> usize {
        self.persist_calls.get()
    }

    /// Seed a collection with raw content, valid or not
    pub fn insert_raw(&self, name: &str, contents: &str) {
        self.collections
            .borrow_mut()
            .insert(name.to_string(), contents.to_string());
    }

    /// Raw stored content of a collection
    pub fn raw(&self, name: &str) -> Option<String> {
        self.collections.borrow().get(name).cloned()
    }
}

impl Store for MemoryStore {
    fn load<T: DeserializeOwned>(&self, name: &str) -> Vec<T> {
        let collections = self.collections.borrow();
        let Some(contents) = collections.get(name) else {
            return Vec::new();
        };

        serde_json::from_str(contents).unwrap_or_else(|e| {
            warn!("Error parsing JSON for {}: {}", name, e);
            Vec::new()
        })
    }

    fn persist<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()> {
        self.persist_calls.set(self.persist_calls.get() + 1);

        if self.simulate_write_error.get() {
            return Err(std::io::Error::other("simulated write error").into());
        }

        let contents = serde_json::to_string_pretty(records)?;
        self.insert_raw(name, &contents);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Course, Note, Record};
    use crate::error::CoursenotesError;
    use tempfile::TempDir;

    fn courses() -> Vec<Course> {
        vec![
            Course {
                id: 1,
                course_name: "Algebra".to_string(),
            },
            Course {
                id: 3,
                course_name: "Biology".to_string(),
            },
        ]
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("db"));

        let loaded: Vec<Course> = store.load(Course::COLLECTION);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_persist_then_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("db"));

        store.persist(Course::COLLECTION, &courses()).unwrap();

        assert!(temp.path().join("db/courses.json").exists());
        let loaded: Vec<Course> = store.load(Course::COLLECTION);
        assert_eq!(loaded, courses());
    }

    #[test]
    fn test_persist_writes_pretty_camel_case() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());

        store.persist(Course::COLLECTION, &courses()).unwrap();

        let content = fs::read_to_string(store.path_for("courses")).unwrap();
        assert!(content.starts_with("[\n  {"));
        assert!(content.contains("\"courseName\": \"Algebra\""));
    }

    #[test]
    fn test_persist_overwrites() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());

        store.persist(Course::COLLECTION, &courses()).unwrap();
        store.persist(Course::COLLECTION, &courses()[..1]).unwrap();

        let loaded: Vec<Course> = store.load(Course::COLLECTION);
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        fs::write(store.path_for("notes"), "[{\"id\": 1,").unwrap();

        let loaded: Vec<Note> = store.load(Note::COLLECTION);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        fs::write(store.path_for("courses"), "{\"id\": 1}").unwrap();

        let loaded: Vec<Course> = store.load(Course::COLLECTION);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_invalid_utf8_is_empty_and_persist_replaces_it() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        fs::write(store.path_for("courses"), [0x5b, 0xff, 0xfe, 0x5d]).unwrap();

        let loaded: Vec<Course> = store.load(Course::COLLECTION);
        assert!(loaded.is_empty());

        store.persist(Course::COLLECTION, &courses()).unwrap();
        let reloaded: Vec<Course> = store.load(Course::COLLECTION);
        assert_eq!(reloaded, courses());
    }

    #[test]
    fn test_load_directory_in_place_of_file() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().to_path_buf());
        fs::create_dir(store.path_for("courses")).unwrap();

        let loaded: Vec<Course> = store.load(Course::COLLECTION);
        assert!(loaded.is_empty());

        match store.persist(Course::COLLECTION, &courses()) {
            Err(CoursenotesError::Io(_)) => {}
            other => panic!("Expected Io error, got {:?}", other),
        }
        assert!(store.path_for("courses").is_dir());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        store.persist(Course::COLLECTION, &courses()).unwrap();

        let loaded: Vec<Course> = store.load(Course::COLLECTION);
        assert_eq!(loaded, courses());
        assert_eq!(store.persist_calls(), 1);
    }

    #[test]
    fn test_memory_store_malformed_is_empty() {
        let store = MemoryStore::new();
        store.insert_raw(Course::COLLECTION, "not json");

        let loaded: Vec<Course> = store.load(Course::COLLECTION);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_memory_store_simulated_write_error() {
        let store = MemoryStore::new();
        store.set_simulate_write_error(true);

        assert!(store.persist(Course::COLLECTION, &courses()).is_err());
        assert!(store.raw(Course::COLLECTION).is_none());
        assert_eq!(store.persist_calls(), 1);
    }
}
