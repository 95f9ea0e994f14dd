//! Workspace discovery and layout

use crate::error::{CoursenotesError, Result};
use crate::infrastructure::config::WORKSPACE_DIR;
use crate::infrastructure::{Config, JsonFileStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a workspace root
pub const ROOT_ENV: &str = "COURSENOTES_ROOT";

/// A directory containing `.coursenotes/` and, by default, a `db/` data directory
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Create a workspace handle with the given root directory
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Discover the workspace root.
    /// Checks COURSENOTES_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_marker_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(CoursenotesError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'coursenotes init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    WORKSPACE_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_marker_dir(&current) {
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(CoursenotesError::NotWorkspace(start.to_path_buf())),
            }
        }
    }

    fn has_marker_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_marker_dir(&self.root)
    }

    /// Create the `.coursenotes` directory, failing if it already exists
    pub fn initialize(&self) -> Result<()> {
        let marker = self.root.join(WORKSPACE_DIR);

        if marker.exists() {
            return Err(CoursenotesError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&marker)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// File store rooted at the configured data directory
    pub fn store(&self, config: &Config) -> JsonFileStore {
        JsonFileStore::new(config.data_path(&self.root))
    }
}
