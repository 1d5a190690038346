//! In-memory source/target fakes for reconciliation tests

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use mirror_tree::{Entry, EntryKind, Error, Result, SourceTree, TargetProject};

/// In-memory directory tree built from path specs.
///
/// A spec ending in `/` is a directory; anything else is a file. Parent
/// directories are created implicitly, so `&["docs/img/logo.png"]`
/// yields `docs`, `docs/img` and the file.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    dirs: BTreeMap<PathBuf, Vec<Entry>>,
}

impl MemoryTree {
    pub fn new(specs: &[&str]) -> Self {
        let mut tree = Self::default();
        tree.dirs.insert(PathBuf::new(), Vec::new());
        for spec in specs {
            tree.insert(spec);
        }
        tree
    }

    fn insert(&mut self, spec: &str) {
        let is_dir = spec.ends_with('/');
        let parts: Vec<&str> = spec.trim_end_matches('/').split('/').collect();
        let mut dir = PathBuf::new();
        for (i, part) in parts.iter().enumerate() {
            let leaf = i == parts.len() - 1;
            let kind = if leaf && !is_dir {
                EntryKind::File
            } else {
                EntryKind::Dir
            };
            let children = self.dirs.entry(dir.clone()).or_default();
            if !children.iter().any(|e| e.name == *part) {
                children.push(Entry {
                    name: part.to_string(),
                    kind,
                });
            }
            dir = dir.join(part);
            if kind == EntryKind::Dir {
                self.dirs.entry(dir.clone()).or_default();
            }
        }
    }

    pub fn children(&self, dir: &Path) -> Vec<Entry> {
        self.dirs.get(dir).cloned().unwrap_or_default()
    }
}

impl SourceTree for MemoryTree {
    fn list_children(&self, dir: &Path) -> Result<Vec<Entry>> {
        Ok(self.children(dir))
    }
}

/// Source fake whose listing fails for one specific directory
pub struct FailingTree {
    pub inner: MemoryTree,
    pub fail_at: PathBuf,
}

impl SourceTree for FailingTree {
    fn list_children(&self, dir: &Path) -> Result<Vec<Entry>> {
        if dir == self.fail_at {
            return Err(Error::PathUnavailable {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "listing failed"),
            });
        }
        self.inner.list_children(dir)
    }
}

/// Fake VSS project: tracked membership plus a log of every call.
///
/// `disk` stands in for the working folder. Adding a directory copies
/// its on-disk subtree into the tracked set, mirroring the recursive
/// add of the real client; deleting a directory drops the whole tracked
/// subtree.
#[derive(Debug, Clone)]
pub struct MemoryProject {
    pub disk: MemoryTree,
    pub tracked: BTreeMap<PathBuf, Vec<Entry>>,
    pub log: Vec<String>,
}

impl MemoryProject {
    pub fn new(disk: MemoryTree, tracked_specs: &[&str]) -> Self {
        Self {
            disk,
            tracked: MemoryTree::new(tracked_specs).dirs,
            log: Vec::new(),
        }
    }

    fn track_subtree(&mut self, dir: &Path) {
        let children = self.disk.children(dir);
        self.tracked.insert(dir.to_path_buf(), children.clone());
        for child in children {
            if child.kind == EntryKind::Dir {
                self.track_subtree(&dir.join(&child.name));
            }
        }
    }

    fn untrack_subtree(&mut self, dir: &Path) {
        let children = self.tracked.remove(dir).unwrap_or_default();
        for child in children {
            if child.kind == EntryKind::Dir {
                self.untrack_subtree(&dir.join(&child.name));
            }
        }
    }
}

fn entry_label(dir: &Path, name: &str) -> String {
    dir.join(name).display().to_string()
}

impl TargetProject for MemoryProject {
    fn list_children(&mut self, dir: &Path) -> Result<Vec<Entry>> {
        Ok(self.tracked.get(dir).cloned().unwrap_or_default())
    }

    fn add_entry(&mut self, dir: &Path, name: &str, kind: EntryKind) -> Result<()> {
        self.log
            .push(format!("add {} {}", kind.label(), entry_label(dir, name)));
        self.tracked
            .entry(dir.to_path_buf())
            .or_default()
            .push(Entry {
                name: name.to_string(),
                kind,
            });
        if kind == EntryKind::Dir {
            self.track_subtree(&dir.join(name));
        }
        Ok(())
    }

    fn delete_entry(&mut self, dir: &Path, name: &str, kind: EntryKind) -> Result<()> {
        self.log
            .push(format!("delete {} {}", kind.label(), entry_label(dir, name)));
        if let Some(children) = self.tracked.get_mut(dir) {
            children.retain(|e| e.name != name);
        }
        if kind == EntryKind::Dir {
            self.untrack_subtree(&dir.join(name));
        }
        Ok(())
    }

    fn checkout(&mut self) -> Result<()> {
        self.log.push("checkout".to_string());
        Ok(())
    }

    fn checkin(&mut self) -> Result<()> {
        self.log.push("checkin".to_string());
        Ok(())
    }
}
