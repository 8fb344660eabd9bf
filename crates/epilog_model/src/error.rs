//! Error types for the Epilog system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Epilog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Epilog operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a parse error at the given position.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: u32, column: u32, context: String) -> Self {
        Self::new(ErrorKind::Parse {
            message: message.into(),
            line,
            column,
            context,
        })
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::new(ErrorKind::Io { path, source })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Source text could not be parsed into the declaration tree.
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// A filesystem operation failed.
    #[error("io error on {}: {source}", path.display())]
    Io {
        /// The path being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
