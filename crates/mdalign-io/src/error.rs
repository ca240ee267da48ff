//! Error types for structure file I/O

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or saving structures
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input path does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Parse error with location information
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// Line number where the error occurred (1-based)
        line: usize,
        /// Error message
        message: String,
    },

    /// Invalid record in the file
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// File contains no atoms
    #[error("Empty file or no atoms found")]
    EmptyFile,
}

impl IoError {
    /// Create a parse error at a specific line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        IoError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid record error
    pub fn invalid_record(record: impl Into<String>) -> Self {
        IoError::InvalidRecord(record.into())
    }
}

/// Result type for structure file I/O operations
pub type IoResult<T> = Result<T, IoError>;
