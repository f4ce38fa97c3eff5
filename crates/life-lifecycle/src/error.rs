//! Lifecycle error types.

use std::path::PathBuf;

use led_matrix::MatrixError;
use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`crate::LifeConfig`].
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    /// A setting that can never work.
    #[error("{0}")]
    Invalid(&'static str),
}

/// Lifecycle error type.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for lifecycle operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;
