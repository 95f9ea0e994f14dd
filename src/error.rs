//! Error types for coursenotes

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the coursenotes data layer and CLI
#[derive(Debug, Error)]
pub enum CoursenotesError {
    #[error("Not a coursenotes directory: {0}")]
    NotWorkspace(PathBuf),

    #[error("Missing required field: {0}")]
    EmptyField(&'static str),

    #[error("Missing required reference: {0}")]
    MissingReference(&'static str),

    #[error("{entity} {id} does not exist")]
    UnknownReference { entity: &'static str, id: u64 },

    #[error("Inconsistent reference: {0}")]
    InconsistentReference(String),

    #[error("No ids left to allocate in {0}")]
    IdExhausted(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl CoursenotesError {
    /// True for errors that reject an operation before anything is written
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CoursenotesError::EmptyField(_)
                | CoursenotesError::MissingReference(_)
                | CoursenotesError::UnknownReference { .. }
                | CoursenotesError::InconsistentReference(_)
        )
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CoursenotesError::NotWorkspace(_) => 2,
            e if e.is_validation() => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            CoursenotesError::NotWorkspace(path) => {
                format!(
                    "Not a coursenotes directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'coursenotes init' in this directory to create a workspace\n\
                    • Navigate to an existing coursenotes directory\n\
                    • Set COURSENOTES_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            CoursenotesError::MissingReference(field) => {
                let flag = match *field {
                    "courseId" => "--course",
                    "textbookId" => "--textbook",
                    "originalTextInputId" => "--text",
                    _ => "",
                };
                if flag.is_empty() {
                    self.to_string()
                } else {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Pass {} <ID> to select the parent record\n\
                        • Use the matching 'list' command to find valid ids",
                        self, flag
                    )
                }
            }
            CoursenotesError::UnknownReference { entity, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Use 'coursenotes {} list' to see existing ids\n\
                    • Set 'references' to 'trust' to skip existence checks",
                    self,
                    entity.to_lowercase()
                )
            }
            CoursenotesError::Config(msg) => {
                if msg.contains("reference policy") {
                    format!(
                        "{}\n\n\
                        Valid policies: enforce, trust\n\
                        Example: coursenotes config references trust",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using CoursenotesError
pub type Result<T> = std::result::Result<T, CoursenotesError>;
