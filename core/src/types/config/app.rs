use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User-facing application configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub setup: SetupConfig,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.setup.service_rating <= 0 {
            errors.push("setup.service_rating must be positive".to_string());
        }

        if self.setup.breaker_count <= 0 {
            errors.push("setup.breaker_count must be positive".to_string());
        }

        if self.setup.spaces <= 0 || self.setup.spaces % 2 != 0 {
            errors.push("setup.spaces must be a positive even number".to_string());
        }

        if self.setup.breaker_count > self.setup.spaces {
            errors.push("setup.breaker_count cannot exceed setup.spaces".to_string());
        }

        errors
    }
}

/// Values pre-filled into the first-time setup form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetupConfig {
    #[serde(default = "default_service_rating")]
    pub service_rating: i32,
    #[serde(default = "default_breaker_count")]
    pub breaker_count: i32,
    #[serde(default = "default_spaces")]
    pub spaces: i32,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            service_rating: default_service_rating(),
            breaker_count: default_breaker_count(),
            spaces: default_spaces(),
        }
    }
}

fn default_service_rating() -> i32 {
    200
}

fn default_breaker_count() -> i32 {
    20
}

fn default_spaces() -> i32 {
    24
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
