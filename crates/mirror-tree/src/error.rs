//! Error types for mirror-tree

use std::path::PathBuf;

/// Result type for mirror-tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while snapshotting or reconciling trees
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A directory expected to exist could not be listed
    #[error("Cannot list directory {path}: {source}")]
    PathUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two listing entries share a name within one directory
    #[error("Duplicate entry '{name}' in listing of {dir}")]
    DuplicateEntry { dir: String, name: String },

    /// Failure reported by a backing version-control tool
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap a backing-tool failure so it can travel through the walk
    pub fn backend(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Backend(source.into())
    }
}
