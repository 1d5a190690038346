//! Error types for mirror-vss

/// Result type for mirror-vss operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving the `ss` client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `ss` exited with a failure status
    #[error("`{program} {args}` failed with exit code {code}: {output}")]
    CommandFailed {
        program: String,
        args: String,
        code: i32,
        output: String,
    },

    /// The project is checked out from somewhere else; the partial
    /// checkout has been rolled back
    #[error("VSS project {project} is checked out elsewhere; checkout was rolled back")]
    CheckedOutElsewhere { project: String },

    /// VSS limits project paths, including the file name, to 259 characters
    #[error("VSS path '{path}' exceeds the {limit}-character project path limit")]
    PathTooLong { path: String, limit: usize },

    /// The `ss` executable could not be spawned at all
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
