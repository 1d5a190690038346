//! Recursive structural reconciliation of a source tree onto a target project

use crate::adapter::{SourceTree, TargetProject};
use crate::diff::{Action, NameMatching, TreeDiff};
use crate::pair::SyncPair;
use crate::snapshot::{DirSnapshot, EntryKind};
use crate::Result;

/// Counts of what a reconciliation pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Directory levels visited (the root plus every common subdirectory)
    pub dirs_reconciled: usize,
    pub files_added: usize,
    pub files_deleted: usize,
    pub dirs_added: usize,
    pub dirs_deleted: usize,
}

impl ReconcileStats {
    /// Total number of structural operations applied
    pub fn operations(&self) -> usize {
        self.files_added + self.files_deleted + self.dirs_added + self.dirs_deleted
    }
}

/// Make the target project's membership match the source tree.
///
/// Walks both trees from their roots, snapshotting one directory level
/// at a time, applying the [`TreeDiff`] operations in delete-before-add
/// order, and descending depth-first into subdirectories present on
/// both sides. Directories present on one side only are a single add or
/// delete — never recursed into. Fail-fast: the first error aborts the
/// walk.
pub fn reconcile(
    source: &dyn SourceTree,
    target: &mut dyn TargetProject,
    matching: NameMatching,
) -> Result<ReconcileStats> {
    let mut stats = ReconcileStats::default();
    walk(source, target, &SyncPair::root(), matching, &mut stats)?;
    Ok(stats)
}

fn walk(
    source: &dyn SourceTree,
    target: &mut dyn TargetProject,
    pair: &SyncPair,
    matching: NameMatching,
    stats: &mut ReconcileStats,
) -> Result<()> {
    let source_snap =
        DirSnapshot::from_entries(&pair.source_label(), source.list_children(&pair.source)?)?;
    let target_snap =
        DirSnapshot::from_entries(&pair.target_label(), target.list_children(&pair.target)?)?;

    let diff = TreeDiff::between(&source_snap, &target_snap, matching);
    for op in diff.operations() {
        match op.action {
            Action::Delete => {
                target.delete_entry(&pair.target, &op.name, op.kind)?;
                match op.kind {
                    EntryKind::File => stats.files_deleted += 1,
                    EntryKind::Dir => stats.dirs_deleted += 1,
                }
            }
            Action::Add => {
                target.add_entry(&pair.target, &op.name, op.kind)?;
                match op.kind {
                    EntryKind::File => stats.files_added += 1,
                    EntryKind::Dir => stats.dirs_added += 1,
                }
            }
        }
    }
    stats.dirs_reconciled += 1;

    tracing::debug!(
        dir = %pair.target_label(),
        deleted = diff.files_to_delete.len() + diff.dirs_to_delete.len(),
        added = diff.files_to_add.len() + diff.dirs_to_add.len(),
        descend = diff.dirs_to_recurse.len(),
        "Reconciled directory level"
    );

    for sub in &diff.dirs_to_recurse {
        walk(
            source,
            target,
            &pair.descend(&sub.source, &sub.target),
            matching,
            stats,
        )?;
    }
    Ok(())
}
