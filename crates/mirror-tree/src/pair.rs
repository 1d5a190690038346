//! Sync pairs: the corresponding source/target paths at one recursion level

use std::path::{Path, PathBuf};

/// The two directories being reconciled at one level of the walk.
///
/// Both paths are relative — `source` to the Git checkout root, `target`
/// to the VSS project root. They stay in lockstep as the walk descends;
/// the component names can differ in spelling only under case-insensitive
/// matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPair {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl SyncPair {
    /// The pair of tree roots
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend both sides by one matched subdirectory
    pub fn descend(&self, source_name: &str, target_name: &str) -> Self {
        Self {
            source: self.source.join(source_name),
            target: self.target.join(target_name),
        }
    }

    /// Human-readable label for the source side (`.` at the root)
    pub fn source_label(&self) -> String {
        label(&self.source)
    }

    /// Human-readable label for the target side (`.` at the root)
    pub fn target_label(&self) -> String {
        label(&self.target)
    }
}

fn label(path: &Path) -> String {
    if path.as_os_str().is_empty() {
        ".".to_string()
    } else {
        path.display().to_string()
    }
}
