//! Configuration management

use crate::domain::ReferencePolicy;
use crate::error::{CoursenotesError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the marker directory holding `config.toml`
pub const WORKSPACE_DIR: &str = ".coursenotes";

const DEFAULT_DATA_DIR: &str = "db";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the collection files, relative to the workspace root
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub references: ReferencePolicy,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    pub created: DateTime<Utc>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: default_data_dir(),
            references: ReferencePolicy::default(),
            log_level: default_log_level(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from .coursenotes/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoursenotesError::NotWorkspace(path.to_path_buf())
            } else {
                CoursenotesError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| CoursenotesError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .coursenotes/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join("config.toml");

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Resolve the data directory against the workspace root
    pub fn data_path(&self, root: &Path) -> PathBuf {
        if self.data_dir.is_absolute() {
            self.data_dir.clone()
        } else {
            root.join(&self.data_dir)
        }
    }
}
