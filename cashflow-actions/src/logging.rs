use std::{
    path::{Path, PathBuf},
    str::FromStr,
    sync::atomic::{AtomicBool, Ordering},
};

use anyhow::{Context, Result};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use tokio::fs as TokioFs;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter, Layer, filter::Directive, layer::SubscriberExt, util::SubscriberInitExt,
};

static INSTALLED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub log_dir: PathBuf,
    pub log_file_prefix: CompactString,
    pub log_level: CompactString,
    pub max_log_files: usize,
    pub rotation: LogRotation,
    /// Mirror human-readable output to stderr
    pub console: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogRotation {
    Never,
    Daily,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("./logs"),
            log_file_prefix: CompactString::const_new("cashflow-actions"),
            log_level: CompactString::const_new("info"),
            max_log_files: 10,
            rotation: LogRotation::Daily,
            console: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Logger already initialized")]
    AlreadyInitialized,

    #[error("Invalid log directory: {0}")]
    InvalidLogDirectory(String),

    #[error("Failed to create log directory: {0}")]
    DirectoryCreationFailed(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub struct LoggerBuilder {
    config: LoggerConfig,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: &str) -> Self {
        self.config.log_level = CompactString::new(level);
        self
    }

    /// Installs the global subscriber: JSON lines to a rolling file, plus an
    /// optional stderr layer. Keep the returned guard alive until exit or
    /// buffered lines are lost.
    pub async fn build(self) -> Result<WorkerGuard> {
        if INSTALLED
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(LoggingError::AlreadyInitialized.into());
        }

        let installed = self.install().await;
        if installed.is_err() {
            INSTALLED.store(false, Ordering::Release);
        }
        installed
    }

    async fn install(self) -> Result<WorkerGuard> {
        let config = self.config;
        validate_config(&config)?;
        setup_log_directory(&config.log_dir).await?;

        let rotation = match config.rotation {
            LogRotation::Never => Rotation::NEVER,
            LogRotation::Daily => Rotation::DAILY,
        };

        let file_appender = RollingFileAppender::builder()
            .rotation(rotation)
            .filename_prefix(config.log_file_prefix.as_str())
            .filename_suffix("jsonl")
            .max_log_files(config.max_log_files)
            .build(&config.log_dir)
            .context("Failed to create file appender")?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let level_str = config.log_level.clone();
        let make_filter = || -> Result<EnvFilter> {
            Ok(EnvFilter::from_default_env().add_directive(
                Directive::from_str(&level_str).context("Invalid log level in config")?,
            ))
        };

        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(false)
            .with_writer(non_blocking)
            .with_filter(make_filter()?);

        let console_layer = if config.console {
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_filter(make_filter()?),
            )
        } else {
            None
        };

        tracing_subscriber::registry()
            .with(json_layer)
            .with(console_layer)
            .try_init()
            .context("Failed to install global tracing subscriber")?;

        Ok(guard)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_config(config: &LoggerConfig) -> Result<()> {
    if config.max_log_files == 0 {
        return Err(
            LoggingError::ConfigError("Max log files must be greater than 0".to_string()).into(),
        );
    }

    if config.log_file_prefix.is_empty() {
        return Err(LoggingError::ConfigError("Log file prefix is empty".to_string()).into());
    }

    Directive::from_str(&config.log_level).map_err(|e| {
        LoggingError::ConfigError(format!("Invalid log level {:?}: {e}", config.log_level))
    })?;

    validate_log_directory(&config.log_dir)?;
    Ok(())
}

fn validate_log_directory(path: &Path) -> Result<()> {
    if path.components().count() == 0 {
        return Err(LoggingError::InvalidLogDirectory("Empty path".to_string()).into());
    }

    if path.is_file() {
        return Err(LoggingError::InvalidLogDirectory(format!(
            "{} is a file",
            path.display()
        ))
        .into());
    }

    Ok(())
}

async fn setup_log_directory(log_dir: &Path) -> Result<()> {
    if !log_dir.exists() {
        TokioFs::create_dir_all(log_dir)
            .await
            .map_err(LoggingError::from)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }
    Ok(())
}

pub async fn init_logging_with_config(config: LoggerConfig) -> Result<WorkerGuard> {
    LoggerBuilder::new().with_config(config).build().await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> LoggerConfig {
        LoggerConfig {
            log_dir: dir.join("logs"),
            rotation: LogRotation::Never,
            ..LoggerConfig::default()
        }
    }

    fn config_error(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<LoggingError>(),
            Some(LoggingError::ConfigError(_))
        )
    }

    #[test]
    fn test_default_config_is_valid() {
        validate_config(&LoggerConfig::default()).unwrap();
    }

    #[test]
    fn test_rejects_zero_max_log_files() {
        let config = LoggerConfig {
            max_log_files: 0,
            ..LoggerConfig::default()
        };
        assert!(config_error(&validate_config(&config).unwrap_err()));
    }

    #[test]
    fn test_rejects_bad_level() {
        let config = LoggerConfig {
            log_level: CompactString::const_new("cashflow_actions=loud"),
            ..LoggerConfig::default()
        };
        assert!(config_error(&validate_config(&config).unwrap_err()));
    }

    #[test]
    fn test_rejects_empty_log_dir() {
        let config = LoggerConfig {
            log_dir: PathBuf::new(),
            ..LoggerConfig::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoggingError>(),
            Some(LoggingError::InvalidLogDirectory(_))
        ));
    }

    #[tokio::test]
    async fn test_build_installs_once() {
        let dir = tempfile::tempdir().unwrap();

        let guard = LoggerBuilder::new()
            .with_config(config_in(dir.path()))
            .with_level("debug")
            .build()
            .await
            .unwrap();
        assert!(dir.path().join("logs").is_dir());

        tracing::info!(action = "LOAD_USER", "logged after install");

        let err = init_logging_with_config(config_in(dir.path()))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoggingError>(),
            Some(LoggingError::AlreadyInitialized)
        ));

        drop(guard);
    }
}
