//! Structural snapshots of a single directory level

use std::collections::BTreeSet;

use crate::{Error, Result};

/// Whether a directory child is a file or a subdirectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    /// Short label for logs and reports
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Dir => "dir",
        }
    }
}

/// One child reported by a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
        }
    }
}

/// The immediate children of one directory, partitioned into files and
/// subdirectories.
///
/// Listing order is discarded: membership is what matters for the diff,
/// and iteration over the sets is lexical and case-sensitive. A listing
/// in which two entries share a name — including a file and a directory
/// sharing a name — is rejected rather than guessed at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirSnapshot {
    files: BTreeSet<String>,
    dirs: BTreeSet<String>,
}

impl DirSnapshot {
    /// Build a snapshot from a directory listing.
    ///
    /// `dir` is only used to label a [`Error::DuplicateEntry`] failure.
    pub fn from_entries(dir: &str, entries: impl IntoIterator<Item = Entry>) -> Result<Self> {
        let mut files = BTreeSet::new();
        let mut dirs = BTreeSet::new();
        for entry in entries {
            if files.contains(&entry.name) || dirs.contains(&entry.name) {
                return Err(Error::DuplicateEntry {
                    dir: dir.to_string(),
                    name: entry.name,
                });
            }
            match entry.kind {
                EntryKind::File => files.insert(entry.name),
                EntryKind::Dir => dirs.insert(entry.name),
            };
        }
        Ok(Self { files, dirs })
    }

    /// The file set F of this directory level
    pub fn files(&self) -> &BTreeSet<String> {
        &self.files
    }

    /// The directory set D of this directory level
    pub fn dirs(&self) -> &BTreeSet<String> {
        &self.dirs
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partitions_entries_by_kind() {
        let snap = DirSnapshot::from_entries(
            ".",
            vec![Entry::file("b.txt"), Entry::dir("sub"), Entry::file("a.txt")],
        )
        .unwrap();

        let files: Vec<_> = snap.files().iter().cloned().collect();
        let dirs: Vec<_> = snap.dirs().iter().cloned().collect();
        assert_eq!(files, vec!["a.txt".to_string(), "b.txt".to_string()]);
        assert_eq!(dirs, vec!["sub".to_string()]);
    }

    #[test]
    fn empty_listing_gives_empty_snapshot() {
        let snap = DirSnapshot::from_entries(".", Vec::new()).unwrap();
        assert!(snap.is_empty());
    }

    #[test]
    fn duplicate_file_name_is_rejected() {
        let err = DirSnapshot::from_entries(
            "docs",
            vec![Entry::file("readme.txt"), Entry::file("readme.txt")],
        )
        .unwrap_err();

        match err {
            Error::DuplicateEntry { dir, name } => {
                assert_eq!(dir, "docs");
                assert_eq!(name, "readme.txt");
            }
            other => panic!("expected DuplicateEntry, got {other:?}"),
        }
    }

    #[test]
    fn file_and_dir_sharing_a_name_is_rejected() {
        let err =
            DirSnapshot::from_entries(".", vec![Entry::file("build"), Entry::dir("build")])
                .unwrap_err();
        assert!(matches!(err, Error::DuplicateEntry { .. }));
    }

    #[test]
    fn names_differing_only_in_case_are_distinct() {
        let snap = DirSnapshot::from_entries(
            ".",
            vec![Entry::file("Makefile"), Entry::file("makefile")],
        )
        .unwrap();
        assert_eq!(snap.files().len(), 2);
    }
}
