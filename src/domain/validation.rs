//! Input checks applied before anything is allocated or written

use crate::error::{CoursenotesError, Result};

/// Trim a required string field, rejecting empty or whitespace-only input
pub fn require_text(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoursenotesError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Require a foreign key to be present. Zero counts as absent since ids start at 1.
pub fn require_ref(field: &'static str, value: Option<u64>) -> Result<u64> {
    match value {
        Some(id) if id > 0 => Ok(id),
        _ => Err(CoursenotesError::MissingReference(field)),
    }
}
