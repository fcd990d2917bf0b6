//! Configuration handling for the form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default tracing filter when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "person_form=info";

const LOG_FILE_NAME: &str = "person-form.log";

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Tracing filter directive, e.g. "person_form=debug"
    pub log_filter: Option<String>,
    /// Write logs to a file in the data directory instead of stderr
    pub log_to_file: Option<bool>,
    /// Show key hints in the status bar
    pub show_key_hints: Option<bool>,
}

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "person-form", "person-form")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the log file, creating its directory if needed
    pub fn log_path() -> Result<Option<PathBuf>> {
        let Some(dirs) = Self::project_dirs() else {
            return Ok(None);
        };
        let dir = dirs.data_local_dir();
        fs::create_dir_all(dir)?;
        Ok(Some(dir.join(LOG_FILE_NAME)))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn log_to_file(&self) -> bool {
        self.log_to_file.unwrap_or(true)
    }

    pub fn show_key_hints(&self) -> bool {
        self.show_key_hints.unwrap_or(true)
    }
}
