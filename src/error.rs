//! Error types for forepath operations.
//!
//! This module defines [`ForepathError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ForepathError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ForepathError::Other`) for unexpected errors
//! - The path prepend itself is infallible; errors only arise at the
//!   surrounding surface (config, resolution, child processes)

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for forepath operations.
#[derive(Debug, Error)]
pub enum ForepathError {
    /// Explicitly requested configuration file not found.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// `init` refused to overwrite an existing config.
    #[error("Configuration already exists: {path} (use --force to overwrite)")]
    ConfigAlreadyExists { path: PathBuf },

    /// Manager name not recognized.
    #[error("Unknown package manager: {name}")]
    UnknownManager { name: String },

    /// Shell name from config not recognized.
    #[error("Unknown shell: {name}")]
    UnknownShell { name: String },

    /// Home directory could not be determined while resolving a bin dir.
    #[error("Could not determine home directory for '{manager}'")]
    HomeDirUnavailable { manager: String },

    /// Auto-detection found no known package manager bin directory.
    #[error("No package manager bin directory found; pass --manager or --dir")]
    ManagerNotDetected,

    /// Child command could not be started.
    #[error("Failed to run '{command}': {message}")]
    CommandSpawnFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for forepath operations.
pub type Result<T> = std::result::Result<T, ForepathError>;
