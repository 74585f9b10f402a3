//! Error types for the fallible edges of the calculator.
//!
//! Arithmetic and classification never fail; only persistence, the
//! message-table resource and configuration loading can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](crate::store::KeyValueStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("store I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file or a stored value is not valid JSON.
    #[error("store contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while fetching the message-table resource.
#[derive(Debug, Error)]
pub enum TableError {
    /// No resource location was configured.
    #[error("no lines file configured")]
    NotConfigured,

    /// The resource exists but could not be read.
    #[error("failed to read message table {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The embedded resource is missing from the binary.
    #[error("embedded resource {0} is missing")]
    MissingAsset(&'static str),
}

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
