//! Application layer - Repositories, the notebook facade and use cases

pub mod init;
pub mod manage_config;
pub mod notebook;
pub mod repositories;

pub use manage_config::ConfigService;
pub use notebook::{Notebook, TextWithNotes};
pub use repositories::{
    CourseRepository, NoteRepository, OriginalTextRepository, TextbookRepository,
};
