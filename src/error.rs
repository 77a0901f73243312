//! Error types for cloudenv operations.
//!
//! This module defines [`CloudEnvError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Name lookups fail with [`CloudEnvError::NotFound`], which keeps the
//!   caller's input exactly as it was given
//! - Config problems carry the path of the offending file
//! - Use `anyhow::Error` (via `CloudEnvError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cloudenv operations.
#[derive(Debug, Error)]
pub enum CloudEnvError {
    /// No environment is registered under the given name.
    ///
    /// `name` is the original input, before any normalization.
    #[error("no environment was found with the name `{name}`")]
    NotFound { name: String },

    /// An explicitly requested config file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cloudenv operations.
pub type Result<T> = std::result::Result<T, CloudEnvError>;
