//! Error types for stencil-walk.

use camino::Utf8PathBuf;
use thiserror::Error;

/// The top-level error type for walk, copy, and rewrite operations.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The search start point exists but is not a directory (or is absent).
    #[error("not a directory: {path}")]
    NotADirectory { path: Utf8PathBuf },

    /// A directory entry's path is not valid UTF-8.
    #[error("non-UTF-8 path: {path:?}")]
    NonUtf8Path { path: std::path::PathBuf },

    /// An enumerated file unexpectedly falls outside the traversal root.
    #[error("path {path} is outside root {root}")]
    OutsideRoot { path: Utf8PathBuf, root: Utf8PathBuf },

    /// Underlying filesystem failure. `fs-err` embeds the offending path
    /// in the error message.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias using WalkError.
pub type WalkResult<T> = Result<T, WalkError>;
