//! Capability interfaces over the backing version-control tools
//!
//! The walk in [`crate::reconcile`] is written entirely against these
//! traits. `mirror-git` and `mirror-vss` provide the real
//! implementations; tests substitute in-memory fakes.

use std::path::Path;

use crate::Result;
use crate::snapshot::{Entry, EntryKind};

/// Read-only view of the synchronization source (the Git checkout).
pub trait SourceTree {
    /// List the immediate children of `dir`, relative to the tree root.
    ///
    /// Must not recurse — each call is one directory level, so the walk
    /// stays O(children) per step and can interleave mutation with
    /// further discovery. Fails with [`crate::Error::PathUnavailable`]
    /// when the directory cannot be read.
    fn list_children(&self, dir: &Path) -> Result<Vec<Entry>>;
}

/// Mutable view of the synchronization target (the VSS project).
///
/// Structural mutation (add/delete) is distinct from the content sync
/// (checkout/checkin): the former changes what the project tracks, the
/// latter propagates bytes of files both sides already have.
pub trait TargetProject {
    /// List the immediate children of `dir`, relative to the project root.
    fn list_children(&mut self, dir: &Path) -> Result<Vec<Entry>>;

    /// Register `name` under `dir` as tracked.
    ///
    /// The entry already exists on disk in the working folder. Adding a
    /// directory registers its on-disk contents as well, so the walk
    /// never descends into a freshly added directory.
    fn add_entry(&mut self, dir: &Path, name: &str, kind: EntryKind) -> Result<()>;

    /// Remove `name` under `dir` from tracking.
    ///
    /// Deleting a directory removes its whole tracked subtree; the walk
    /// must not also delete that subtree's individual children.
    fn delete_entry(&mut self, dir: &Path, name: &str, kind: EntryKind) -> Result<()>;

    /// Non-destructive recursive checkout of the whole project.
    ///
    /// Locally modified files are preserved.
    fn checkout(&mut self) -> Result<()>;

    /// Recursive checkin of the whole project.
    fn checkin(&mut self) -> Result<()>;
}
