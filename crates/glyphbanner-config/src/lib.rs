//! # glyphbanner Configuration
//!
//! Settings for the glyphbanner command-line front end.
//!
//! Configuration sources (in priority order):
//! 1. CLI arguments
//! 2. Environment variables (`GLYPHBANNER_RENDER__FONT=mini`)
//! 3. User config (~/.config/glyphbanner/config.toml)
//! 4. Built-in defaults

use anyhow::Context;
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "GLYPHBANNER_";

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("dev", "glyphbanner", "glyphbanner")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/glyphbanner"))
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Banner rendering
    pub render: RenderConfig,
    /// Log output
    pub logging: LoggingConfig,
}

/// Banner rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Font used when none is given on the command line
    pub font: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font: "small".to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Configuration manager
pub struct ConfigManager {
    config: RwLock<Config>,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Load from the default config location
    pub fn new() -> anyhow::Result<Self> {
        Self::with_path(config_dir().join("config.toml"))
    }

    /// Load from `config_path`, falling back to defaults if it doesn't exist
    pub fn with_path(config_path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let config_path = config_path.into();
        let config = Self::load_from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

        Ok(Self {
            config: RwLock::new(config),
            config_path,
        })
    }

    /// Load configuration from file, layered over defaults and under the environment
    fn load_from_file(path: &Path) -> anyhow::Result<Config> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if path.exists() {
            tracing::debug!("Reading config file {}", path.display());
            figment = figment.merge(Toml::file(path));
        }
        let figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(figment.extract()?)
    }

    /// Path the configuration is read from and saved to
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get current configuration
    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Update configuration
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.config.write();
        f(&mut config);
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let config = self.config.read();
        let content = toml::to_string_pretty(&*config)?;

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.config_path, content)
            .with_context(|| format!("Failed to write {}", self.config_path.display()))?;
        tracing::info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }
}
