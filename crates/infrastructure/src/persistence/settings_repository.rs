//! Resolver settings persistence.
//!
//! Stores resolver settings in the platform-specific config directory:
//! - Linux: ~/.config/topiclab/resolver.json
//! - macOS: ~/Library/Application Support/topiclab/resolver.json
//! - Windows: %APPDATA%/topiclab/resolver.json

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use topiclab_application::{ApplicationError, ApplicationResult, SettingsStore};
use topiclab_domain::{DomainError, ResolverSettings};
use tracing::debug;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable};

const APP_DIR: &str = "topiclab";
const SETTINGS_FILE: &str = "resolver.json";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// The stored settings are inconsistent.
    #[error("Invalid settings: {0}")]
    Invalid(#[from] DomainError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl From<SettingsError> for ApplicationError {
    fn from(error: SettingsError) -> Self {
        match error {
            SettingsError::Invalid(domain) => Self::Domain(domain),
            other => Self::Storage(other.to_string()),
        }
    }
}

/// Repository for resolver settings persistence.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository using the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Creates a repository reading and writing an explicit file.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the default settings path, if a config directory exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Returns the path this repository uses.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads resolver settings from disk.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds inconsistent values.
    pub async fn load_settings(&self) -> Result<ResolverSettings, SettingsError> {
        let Some(path) = &self.path else {
            return Ok(ResolverSettings::default());
        };

        if !fs::try_exists(path).await? {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(ResolverSettings::default());
        }

        let content = fs::read(path).await?;
        let settings: ResolverSettings = from_json_bytes(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Saves resolver settings to disk, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are inconsistent or the file cannot
    /// be written.
    pub async fn save_settings(&self, settings: &ResolverSettings) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Err(SettingsError::NoConfigDir);
        };

        settings.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = to_json_stable(settings)?;
        fs::write(path, content).await?;
        debug!(path = %path.display(), "saved resolver settings");

        Ok(())
    }
}

#[async_trait]
impl SettingsStore for SettingsRepository {
    async fn load(&self) -> ApplicationResult<ResolverSettings> {
        Ok(self.load_settings().await?)
    }

    async fn save(&self, settings: &ResolverSettings) -> ApplicationResult<()> {
        Ok(self.save_settings(settings).await?)
    }
}
