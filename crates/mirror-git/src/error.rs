//! Error types for mirror-git

/// Result type for mirror-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mirror-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Branch '{name}' not found in {url}")]
    BranchNotFound { name: String, url: String },

    #[error("Remote '{name}' not found")]
    RemoteNotFound { name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
