//! Error types for the pathops library.
//!
//! Unresolvable paths and directory precondition violations are plain error
//! values, so callers decide whether to report and exit.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathops error.
///
/// # Examples
///
/// ```
/// use pathops::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/tmp".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathops library.
#[derive(Debug, Error)]
pub enum Error {
    /// The existing prefix of a path could not be canonicalized.
    #[error("could not resolve path for {path}: {source}")]
    PathResolution {
        /// The path that was being resolved.
        path: String,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// A directory was requested where a non-directory already exists.
    #[error("{} is not a directory", path.display())]
    NotADirectory {
        /// Absolute path of the offending entry.
        path: PathBuf,
    },

    /// A directory was requested whose parent does not exist.
    #[error("{} is not a directory", path.display())]
    MissingParent {
        /// Absolute path of the missing parent.
        path: PathBuf,
    },

    /// The command interpreter could not be started.
    #[error("failed to run command '{command}': {source}")]
    CommandSpawn {
        /// The command string that was passed to the shell.
        command: String,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Check if the error is a directory-creation precondition violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathops::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::MissingParent { path: PathBuf::from("/missing") };
    /// assert!(err.is_precondition_violation());
    /// ```
    #[must_use]
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::NotADirectory { .. } | Self::MissingParent { .. })
    }

    /// Check if the error came from absolute path resolution.
    #[must_use]
    pub fn is_resolution_failure(&self) -> bool {
        matches!(self, Self::PathResolution { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_resolution_error() {
        let err = Error::PathResolution {
            path: "/some/where".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let display = format!("{err}");
        assert!(display.contains("could not resolve path"));
        assert!(display.contains("/some/where"));
        assert!(err.is_resolution_failure());
        assert!(!err.is_precondition_violation());
    }

    #[test]
    fn test_not_a_directory_error() {
        let err = Error::NotADirectory {
            path: PathBuf::from("/data/file.txt"),
        };
        let display = format!("{err}");
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/data/file.txt"));
        assert!(display.contains("is not a directory"));
        assert!(err.is_precondition_violation());
    }

    #[test]
    fn test_missing_parent_error() {
        let err = Error::MissingParent {
            path: PathBuf::from("/no/such/parent"),
        };
        assert!(err.is_precondition_violation());
        assert!(format!("{err}").contains("is not a directory"));
    }

    #[test]
    fn test_command_spawn_error() {
        let err = Error::CommandSpawn {
            command: "echo hi".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no shell"),
        };
        let display = format!("{err}");
        assert!(display.contains("echo hi"));
        assert!(display.contains("no shell"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "directory_mode".to_string(),
            message: "must be at most 0o7777".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("directory_mode"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }
}
