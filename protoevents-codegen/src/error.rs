//! Error types for code generation.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema scanning error.
    #[error("schema parse error: {0}")]
    Parse(#[from] protoevents_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Renaming the temporary file over the output failed.
    #[error("failed to replace output file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// Invalid generator configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a configuration error with the given message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Error type for the external formatter pass.
///
/// Never fatal to generation; callers log it and carry on.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The formatter could not be started.
    #[error("failed to run formatter '{program}': {source}")]
    Spawn {
        /// Formatter program.
        program: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The formatter ran and reported failure.
    #[error("formatter '{program}' exited with {status} on {path:?}: {stderr}")]
    Failed {
        /// Formatter program.
        program: String,
        /// File that was being formatted.
        path: PathBuf,
        /// Exit status.
        status: ExitStatus,
        /// Captured standard error, trimmed.
        stderr: String,
    },
}
