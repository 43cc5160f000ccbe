//! Configuration file support for energysync.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/energysync/config.toml`.

use crate::drinks::DrinkTable;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub drinks: DrinkTable,

    #[serde(default)]
    pub projection: ProjectionConfig,
}

/// Caffeine projection configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Hour (0-23) the remaining caffeine is projected to, typically bedtime
    #[serde(default = "default_target_hour")]
    pub target_hour: u8,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            target_hour: default_target_hour(),
        }
    }
}

fn default_target_hour() -> u8 {
    22
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".into()))?;
        Ok(base.join("energysync").join("config.toml"))
    }

    /// Reject values the calculator cannot use
    pub fn validate(&self) -> Result<()> {
        let mut errors = self.drinks.validate();
        if self.projection.target_hour > 23 {
            errors.push(format!(
                "projection.target_hour must be 0-23, got {}",
                self.projection.target_hour
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Config(errors.join("; ")))
        }
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
