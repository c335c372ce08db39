//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Loads and saves settings as TOML from the cross-platform config path
//! provided by the [`directories`](https://docs.rs/directories) crate.
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?;
//! config.save().await?;
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use tokio::fs as TokioFs;

use crate::{error::AppError, logging::LoggerConfig};

/// How the binary renders the contract table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One `NAME<TAB>CATEGORY<TAB>PHASE` line per identifier.
    #[default]
    Plain,

    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Run `ActionRegistry::verify` before doing anything else
    pub verify_on_startup: bool,

    pub export_format: ExportFormat,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            verify_on_startup: true,
            export_format: ExportFormat::Plain,
        }
    }
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggerConfig,

    #[serde(default)]
    pub registry: RegistryConfig,
}

impl Config {
    /// Loads config from the platform config dir, creating it with defaults
    /// when missing.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/CashflowActions/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub async fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;
        Ok(Self::load_from(&path).await?)
    }

    /// Saves config to the platform config dir.
    pub async fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path()?;
        Ok(self.save_to(&path).await?)
    }

    pub async fn load_from(path: &Path) -> Result<Self, AppError> {
        if TokioFs::try_exists(path)
            .await
            .map_err(|e| AppError::config_io(path, e))?
        {
            info!("Loading config from {}", path.display());
            let text = TokioFs::read_to_string(path)
                .await
                .map_err(|e| AppError::config_io(path, e))?;
            let cfg: Self = toml::from_str(&text)?;

            Ok(cfg)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save_to(path).await?;

            Ok(default_config)
        }
    }

    pub async fn save_to(&self, path: &Path) -> Result<(), AppError> {
        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::config_io(parent, e))?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(path, toml_str)
            .await
            .map_err(|e| AppError::config_io(path, e))?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "cashflow", "CashflowActions")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory."))?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogRotation;

    #[tokio::test]
    async fn test_missing_file_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config::load_from(&path).await.unwrap();
        assert!(path.exists());
        assert!(cfg.registry.verify_on_startup);
        assert_eq!(cfg.registry.export_format, ExportFormat::Plain);
        assert_eq!(cfg.logging.log_level, "info");
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        cfg.registry.export_format = ExportFormat::Json;
        cfg.logging.log_level = "debug".into();
        cfg.logging.rotation = LogRotation::Never;
        cfg.save_to(&path).await.unwrap();

        let loaded = Config::load_from(&path).await.unwrap();
        assert_eq!(loaded.registry, cfg.registry);
        assert_eq!(loaded.logging.log_level, "debug");
        assert!(matches!(loaded.logging.rotation, LogRotation::Never));
    }

    #[tokio::test]
    async fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "[registry]\nexport_format = \"json\"\n")
            .await
            .unwrap();

        let cfg = Config::load_from(&path).await.unwrap();
        assert_eq!(cfg.registry.export_format, ExportFormat::Json);
        assert!(cfg.registry.verify_on_startup);
        assert_eq!(cfg.logging.max_log_files, LoggerConfig::default().max_log_files);
    }

    #[tokio::test]
    async fn test_malformed_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "registry = [").await.unwrap();

        let err = Config::load_from(&path).await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
