//! Error types for lfs-advisor

use thiserror::Error;

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Error types for advisor operations
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// File metadata could not be read (vanished, dangling link, no permission)
    #[error("Could not access '{path}': {reason}")]
    FileAccess { path: String, reason: String },

    /// The submodule declaration file is malformed
    #[error("line {line}: {reason}")]
    SubmoduleConfig { line: usize, reason: String },

    /// I/O error while reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
