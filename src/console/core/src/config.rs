//! Configuration management.

use serde::Deserialize;
use std::path::PathBuf;

use crate::telemetry::LoggingConfig;

/// Main console configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsoleConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Navigation stack configuration
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Session storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavigationConfig {
    /// Maximum history depth; the oldest entries are dropped beyond it
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Session file holding the stored role. Defaults to
    /// `~/.tiffin-console/session.toml` when unset.
    pub session_file: Option<PathBuf>,
}

fn default_max_depth() -> usize {
    50
}

impl ConsoleConfig {
    /// Load configuration from `.env` and `TIFFIN__*` environment variables.
    pub fn load() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("TIFFIN").separator("__"))
            .build()?;

        let cfg: ConsoleConfig = config.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a specific file path, with environment overrides.
    pub fn from_file(path: &str) -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("TIFFIN").separator("__"))
            .build()?;

        let cfg: ConsoleConfig = config.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> crate::Result<()> {
        if self.navigation.max_depth == 0 {
            return Err(crate::ConsoleError::configuration(
                "navigation.max_depth must be at least 1",
            ));
        }
        Ok(())
    }
}
