//! Sync orchestration for git-vss-mirror
//!
//! Sequences one synchronization run: clone the Git branch into a fresh
//! temporary directory, propagate content changes through a VSS
//! checkout/checkin pass, reconcile the tree structure, then apply the
//! optional tag. Single-threaded and fail-fast: the first failing
//! external command aborts the run, and the temporary clone is kept on
//! disk for inspection.
//!
//! # Architecture
//!
//! `mirror-core` sits above the collaborator crates and below the CLI:
//!
//! ```text
//!        mirror-cli
//!            |
//!       mirror-core
//!        /        \
//!   mirror-git  mirror-vss
//!        \        /
//!        mirror-tree
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod sync;

pub use config::SyncConfig;
pub use error::{Error, Result};
pub use report::SyncReport;
pub use sync::{run_sync, sync_structure};
