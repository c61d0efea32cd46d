//! Error types for retroterm
//!
//! Two layers:
//! - [`PathError`]: failures of a single virtual file system operation
//! - [`Error`]: everything a command dispatch can report
//!
//! Every message is meant to be shown to the terminal user verbatim, so the
//! `Display` output is short and lowercase, shell style.

use thiserror::Error;

use crate::fs::FsLimitExceeded;

/// Result type alias using retroterm's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Virtual file system errors.
///
/// Returned by every [`VirtualFileSystem`](crate::VirtualFileSystem)
/// operation. A failed operation never leaves the tree or the cursor
/// modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A path segment has no matching child.
    #[error("no such file or directory: {0}")]
    NotFound(String),

    /// Attempted to descend through, list into, or enter a file.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Attempted to read the content of a directory.
    #[error("is a directory: {0}")]
    IsADirectory(String),

    /// Creation collides with an existing child of either kind.
    #[error("file exists: {0}")]
    AlreadyExists(String),

    /// The name to create is empty.
    #[error("invalid name: '{0}'")]
    InvalidName(String),

    /// The mutation would exceed a configured [`FsLimits`](crate::FsLimits) bound.
    #[error("{0}")]
    Limit(#[from] FsLimitExceeded),
}

/// retroterm error types.
#[derive(Error, Debug)]
pub enum Error {
    /// A file system operation failed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// No handler is registered under this name.
    #[error("command not found: {0}")]
    CommandNotFound(String),

    /// The command was invoked with missing or malformed operands.
    #[error("{0}")]
    Usage(String),
}

impl Error {
    /// Create a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}
