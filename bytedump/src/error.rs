//! Error types for the bytedump library.
//!
//! This module provides the error hierarchy for all operations in the
//! bytedump library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a bytedump error.
///
/// # Examples
///
/// ```
/// use bytedump::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the bytedump library.
///
/// This enum encompasses all possible error conditions that can occur
/// while resolving a path, reading a file, or writing its dump.
#[derive(Debug, Error)]
pub enum Error {
    /// The required path argument was not supplied.
    #[error("missing required path argument")]
    MissingArgument,

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The path does not exist.
    #[error("file not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing the path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// The path names a directory rather than a regular file.
    #[error("is a directory: {}", path.display())]
    IsDirectory {
        /// The directory path.
        path: PathBuf,
    },

    /// Reading the file failed for an OS-level reason other than the
    /// dedicated variants above.
    #[error("failed to read {}: {source}", path.display())]
    ReadFailed {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred outside of file reading (e.g. writing output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytedump::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytedump::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
