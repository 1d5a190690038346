//! Error types for mirror-core

/// Result type for mirror-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a synchronization run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Snapshot or reconciliation error
    #[error(transparent)]
    Tree(#[from] mirror_tree::Error),

    /// Git-side failure (clone, tag)
    #[error(transparent)]
    Git(#[from] mirror_git::Error),

    /// VSS-side failure (checkout, checkin, add, delete)
    #[error(transparent)]
    Vss(#[from] mirror_vss::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
