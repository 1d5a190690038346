//! Run report for a synchronization pass

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use mirror_tree::ReconcileStats;

/// What a completed run did, for human or JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    pub branch: String,
    pub project: String,
    pub dirs_reconciled: usize,
    pub files_added: usize,
    pub files_deleted: usize,
    pub dirs_added: usize,
    pub dirs_deleted: usize,
    /// Tag applied at the end of the run, if any
    pub tag: Option<String>,
    /// Path of the retained clone when `keep_clone` was requested
    pub clone_dir: Option<PathBuf>,
}

impl SyncReport {
    pub fn new(branch: String, project: String, stats: ReconcileStats) -> Self {
        Self {
            branch,
            project,
            dirs_reconciled: stats.dirs_reconciled,
            files_added: stats.files_added,
            files_deleted: stats.files_deleted,
            dirs_added: stats.dirs_added,
            dirs_deleted: stats.dirs_deleted,
            tag: None,
            clone_dir: None,
        }
    }

    /// Total number of structural operations applied
    pub fn operations(&self) -> usize {
        self.files_added + self.files_deleted + self.dirs_added + self.dirs_deleted
    }
}
