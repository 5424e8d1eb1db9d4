//! Error types for json2go
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for json2go
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Parse Errors (the only fatal class raised by the core)
    // ============================================================================
    #[error("Parse error at byte {offset}: {message}")]
    Parse { offset: usize, message: String },

    #[error("Unsupported document root: expected an object or an array")]
    UnsupportedRoot,

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to serialize schema: {0}")]
    SchemaJson(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a parse error at a byte offset
    pub fn parse(offset: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            offset,
            message: message.into(),
        }
    }

    /// Create a file-not-found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Check if this error is the fatal parse class
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. } | Error::UnsupportedRoot)
    }
}

/// Result type alias for json2go
pub type Result<T> = std::result::Result<T, Error>;
