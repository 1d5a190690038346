//! Structural tree reconciliation for git-vss-mirror
//!
//! This crate holds the pure logic of the mirror: directory snapshots,
//! set-based diffing between the two sides, and the recursive walk that
//! applies the resulting operations. It talks to the outside world only
//! through the [`SourceTree`] and [`TargetProject`] capability traits, so
//! the whole walk can be exercised with in-process fakes.
//!
//! # Architecture
//!
//! `mirror-tree` sits at the bottom of the workspace:
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

pub mod adapter;
pub mod diff;
pub mod error;
pub mod pair;
pub mod reconcile;
pub mod snapshot;

pub use adapter::{SourceTree, TargetProject};
pub use diff::{Action, NameMatching, Operation, RecursePair, TreeDiff};
pub use error::{Error, Result};
pub use pair::SyncPair;
pub use reconcile::{ReconcileStats, reconcile};
pub use snapshot::{DirSnapshot, Entry, EntryKind};
