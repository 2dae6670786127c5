//! Core error types for ironmind-core.
//!
//! This module defines the error hierarchy using thiserror. Errors are
//! surfaced to the caller without retries; the presentation layer is
//! responsible for turning them into user-facing hints.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ironmind-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The log table is missing or holds no rows.
    #[error("no log data available at {path}")]
    DataUnavailable { path: PathBuf },

    /// Too few (or too degenerate) observations for the requested fit.
    #[error("insufficient data: {actual} rows where at least {required} independent observations are required")]
    InsufficientData { required: usize, actual: usize },

    /// Storage-related errors
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open or create the log table
    #[error("failed to open log table at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the log table
    #[error("failed to write log table at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted row could not be decoded
    #[error("malformed row at {path}:{line}: {message}")]
    ParseFailed {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration directory could not be created
    #[error("configuration directory unavailable: {0}")]
    DirUnavailable(String),

    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
