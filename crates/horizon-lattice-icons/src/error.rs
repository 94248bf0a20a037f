//! Error types for icon theme loading.

use std::path::PathBuf;

/// Result type alias for icon theme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading an icon theme index.
///
/// Every variant aborts the theme file being read. Failing to find an icon is
/// not an error; lookups return `Option` instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed line, non-numeric integer field or unknown `Type`.
    #[error("index.theme syntax error at line {line}: {message}")]
    Grammar { message: String, line: usize },

    /// A theme or subdirectory group closed without its required keys.
    #[error("Invalid icon theme: {message}")]
    Validation { message: String },

    /// The index file could not be read.
    #[error("Failed to read theme index '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a grammar error.
    pub fn grammar(message: impl Into<String>, line: usize) -> Self {
        Self::Grammar {
            message: message.into(),
            line,
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Line number for grammar errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Grammar { line, .. } => Some(*line),
            _ => None,
        }
    }
}
