//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Action Registry
//!
//! The registry itself cannot fail when mapping an identifier to its token.
//! Errors only arise at the edges: resolving a token that arrived from
//! elsewhere, self-checking the table, and loading configuration.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A token that names no declared action identifier.
    #[error("Unknown action type: {0:?}")]
    UnknownActionType(String),

    /// The registry table broke one of its invariants.
    #[error("Registry invariant violated for {name}: {reason}")]
    RegistryInvariant { name: String, reason: String },

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Serialization or deserialization error (e.g., JSON).
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Create a registry invariant error
    pub fn registry_invariant<S1: Into<String>, S2: Into<String>>(name: S1, reason: S2) -> Self {
        Self::RegistryInvariant {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a config I/O error for `path`
    pub fn config_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self::Other(e.to_string())
    }
}
