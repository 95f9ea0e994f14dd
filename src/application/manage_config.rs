//! Config management use case

use crate::domain::ReferencePolicy;
use crate::error::{CoursenotesError, Result};
use crate::infrastructure::{Config, Workspace};
use std::path::PathBuf;
use std::str::FromStr;

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "data_dir" => Ok(config.data_dir.display().to_string()),
            "references" => Ok(config.references.to_string()),
            "log_level" => Ok(config.log_level.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(CoursenotesError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: data_dir, references, log_level, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "data_dir" => {
                if value.trim().is_empty() {
                    return Err(CoursenotesError::Config(
                        "data_dir cannot be empty".to_string(),
                    ));
                }
                config.data_dir = PathBuf::from(value);
            }
            "references" => {
                config.references =
                    ReferencePolicy::from_str(value).map_err(CoursenotesError::Config)?;
            }
            "log_level" => {
                config.log_level = value.to_string();
            }
            "created" => {
                return Err(CoursenotesError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(CoursenotesError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: data_dir, references, log_level",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}
