//! Error types for ripen

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the ripen application
#[derive(Debug, Error)]
pub enum RipenError {
    #[error("Date format not recognized: {0}")]
    DateFormat(String),

    #[error("Not a document directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Malformed front matter: {0}")]
    FrontMatter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RipenError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RipenError::NotADirectory(_) => 2,
            RipenError::DateFormat(_) => 3,
            _ => 1,
        }
    }
}

/// Result type using RipenError
pub type Result<T> = std::result::Result<T, RipenError>;
