//! Configuration handling

use crate::payload::EmptyFieldPolicy;
use crate::validation::{ValidationContext, DEFAULT_MINIMUM_AGE};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the outbox directory
pub const OUTBOX_ENV: &str = "MEDIBOOK_OUTBOX";

/// Country preselected on the address step
pub const DEFAULT_COUNTRY: &str = "CAN";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Country preselected in new forms
    pub default_country: Option<String>,
    /// Minimum patient age in years
    pub minimum_age: Option<u32>,
    /// Directory submitted payloads are written to
    pub outbox_dir: Option<PathBuf>,
    /// Whether blank optional fields are sent as null or left out
    pub empty_field_policy: Option<EmptyFieldPolicy>,
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("app", "medibook", "medibook")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for log files
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("logs"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_init(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load `path`, writing the defaults there first if it does not exist yet
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Self::default();
        config.save_to(path)?;
        tracing::info!("Wrote default configuration to {}", path.display());
        Ok(config)
    }

    /// Load configuration from `path`; a missing file gives the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn country(&self) -> &str {
        self.default_country.as_deref().unwrap_or(DEFAULT_COUNTRY)
    }

    pub fn empty_field_policy(&self) -> EmptyFieldPolicy {
        self.empty_field_policy.unwrap_or_default()
    }

    /// Outbox directory: environment, then config file, then the data directory
    pub fn outbox_dir(&self) -> PathBuf {
        if let Some(dir) = std::env::var_os(OUTBOX_ENV) {
            return PathBuf::from(dir);
        }
        if let Some(dir) = &self.outbox_dir {
            return dir.clone();
        }
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join("outbox"))
            .unwrap_or_else(|| PathBuf::from("outbox"))
    }

    /// Validation context for today's date
    pub fn validation_context(&self) -> ValidationContext {
        ValidationContext::now()
            .with_minimum_age(self.minimum_age.unwrap_or(DEFAULT_MINIMUM_AGE))
    }
}
