//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod logging;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use store::{JsonFileStore, MemoryStore, Store};
pub use workspace::Workspace;
