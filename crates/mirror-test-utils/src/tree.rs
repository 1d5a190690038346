//! On-disk directory tree fixtures

use std::fs;
use std::path::Path;

/// Create files and directories under `root` from path specs.
///
/// A spec ending in `/` creates a directory; anything else creates a
/// file (with any missing parents) whose content is the spec string
/// itself.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn build_tree(root: &Path, specs: &[&str]) {
    for spec in specs {
        let path = root.join(spec.trim_end_matches('/'));
        if spec.ends_with('/') {
            fs::create_dir_all(&path)
                .unwrap_or_else(|e| panic!("build_tree: failed to create {spec}: {e}"));
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .unwrap_or_else(|e| panic!("build_tree: failed to create parent of {spec}: {e}"));
            }
            fs::write(&path, spec)
                .unwrap_or_else(|e| panic!("build_tree: failed to write {spec}: {e}"));
        }
    }
}
