//! Structural set difference between two directory snapshots

use std::collections::{BTreeMap, BTreeSet};

use crate::snapshot::{DirSnapshot, EntryKind};

/// How entry names are matched across the two sides.
///
/// VSS and the filesystem may disagree on case folding, so exact
/// byte-wise comparison is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameMatching {
    /// Exact byte-wise comparison
    #[default]
    Exact,
    /// Unicode-lowercase folding for membership tests; operations keep
    /// each side's original spelling
    IgnoreCase,
}

impl NameMatching {
    fn key(self, name: &str) -> String {
        match self {
            NameMatching::Exact => name.to_string(),
            NameMatching::IgnoreCase => name.to_lowercase(),
        }
    }
}

/// A subdirectory present on both sides, carrying each side's spelling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecursePair {
    pub source: String,
    pub target: String,
}

/// Whether an operation removes or registers an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Delete,
    Add,
}

/// One structural mutation to apply on the target side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub action: Action,
    pub kind: EntryKind,
    pub name: String,
}

/// The add/delete/recurse sets for one directory level.
///
/// Pure data: computing a diff has no side effects, and applying it is
/// the walk's job. All name vectors are lexically sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeDiff {
    /// Fvss − Fgit
    pub files_to_delete: Vec<String>,
    /// Fgit − Fvss
    pub files_to_add: Vec<String>,
    /// Dvss − Dgit
    pub dirs_to_delete: Vec<String>,
    /// Dgit − Dvss
    pub dirs_to_add: Vec<String>,
    /// Dgit ∩ Dvss
    pub dirs_to_recurse: Vec<RecursePair>,
}

impl TreeDiff {
    /// Compare the source (Git) snapshot against the target (VSS) one.
    pub fn between(source: &DirSnapshot, target: &DirSnapshot, matching: NameMatching) -> Self {
        let source_files = key_set(source.files(), matching);
        let target_files = key_set(target.files(), matching);
        let source_dirs = key_set(source.dirs(), matching);
        // Map, not set: recursion pairs need the target-side spelling back.
        let target_dirs: BTreeMap<String, &String> = target
            .dirs()
            .iter()
            .map(|name| (matching.key(name), name))
            .collect();

        let files_to_delete = missing_from(target.files(), &source_files, matching);
        let files_to_add = missing_from(source.files(), &target_files, matching);
        let dirs_to_delete = target
            .dirs()
            .iter()
            .filter(|name| !source_dirs.contains(&matching.key(name)))
            .cloned()
            .collect();

        let mut dirs_to_add = Vec::new();
        let mut dirs_to_recurse = Vec::new();
        for name in source.dirs() {
            match target_dirs.get(&matching.key(name)) {
                Some(target_name) => dirs_to_recurse.push(RecursePair {
                    source: name.clone(),
                    target: (*target_name).clone(),
                }),
                None => dirs_to_add.push(name.clone()),
            }
        }

        Self {
            files_to_delete,
            files_to_add,
            dirs_to_delete,
            dirs_to_add,
            dirs_to_recurse,
        }
    }

    /// No operations and nothing to recurse into
    pub fn is_empty(&self) -> bool {
        self.files_to_delete.is_empty()
            && self.files_to_add.is_empty()
            && self.dirs_to_delete.is_empty()
            && self.dirs_to_add.is_empty()
            && self.dirs_to_recurse.is_empty()
    }

    /// Operations in application order: all deletions strictly before all
    /// additions, so both directions of a file↔directory type change are
    /// collision-free.
    pub fn operations(&self) -> Vec<Operation> {
        let mut ops = Vec::with_capacity(
            self.files_to_delete.len()
                + self.dirs_to_delete.len()
                + self.dirs_to_add.len()
                + self.files_to_add.len(),
        );
        for name in &self.files_to_delete {
            ops.push(Operation {
                action: Action::Delete,
                kind: EntryKind::File,
                name: name.clone(),
            });
        }
        for name in &self.dirs_to_delete {
            ops.push(Operation {
                action: Action::Delete,
                kind: EntryKind::Dir,
                name: name.clone(),
            });
        }
        for name in &self.dirs_to_add {
            ops.push(Operation {
                action: Action::Add,
                kind: EntryKind::Dir,
                name: name.clone(),
            });
        }
        for name in &self.files_to_add {
            ops.push(Operation {
                action: Action::Add,
                kind: EntryKind::File,
                name: name.clone(),
            });
        }
        ops
    }
}

fn key_set(names: &BTreeSet<String>, matching: NameMatching) -> BTreeSet<String> {
    names.iter().map(|name| matching.key(name)).collect()
}

fn missing_from(
    names: &BTreeSet<String>,
    other_keys: &BTreeSet<String>,
    matching: NameMatching,
) -> Vec<String> {
    names
        .iter()
        .filter(|name| !other_keys.contains(&matching.key(name)))
        .cloned()
        .collect()
}
