//! Git repository fixtures at two realism levels.
//!
//! Choose the lowest-realism fixture that satisfies your test's needs —
//! an empty init is faster than a repository with history.

use std::path::Path;
use std::process::Command;

use crate::tree::build_tree;

/// Initialises a real git repository using `git2` (no commits, no config).
///
/// Realism level: **REAL** — valid git object store, empty history.
///
/// Use for: tests that need a repository to open but never read history.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Initialises a real git repository on branch `main` whose single
/// commit contains the given tree specs (see [`build_tree`]).
///
/// Realism level: **REAL WITH HISTORY** — valid git state, `main`
/// branch, one commit. Uses the `git` CLI so the repository looks
/// exactly like one a clone would produce.
///
/// # Panics
/// Panics if any git operation fails.
pub fn repo_with_tree(path: &Path, specs: &[&str]) {
    run_git(path, &["init"]);
    run_git(path, &["config", "user.email", "test@test.com"]);
    run_git(path, &["config", "user.name", "Test User"]);
    run_git(path, &["config", "commit.gpgsign", "false"]);

    build_tree(path, specs);

    run_git(path, &["add", "."]);
    run_git(path, &["commit", "-m", "Initial commit"]);
    // Best-effort: older git versions may not support this flag
    let _ = Command::new("git")
        .args(["branch", "-m", "main"])
        .current_dir(path)
        .output();
}

/// Clones `src` into a bare repository at `dst`, for use as an origin
/// that pushes can land in.
///
/// # Panics
/// Panics if the clone fails.
pub fn bare_clone(src: &Path, dst: &Path) {
    let output = Command::new("git")
        .arg("clone")
        .arg("--bare")
        .arg(src)
        .arg(dst)
        .output()
        .unwrap_or_else(|e| panic!("bare_clone: failed to run git clone: {e}"));
    if !output.status.success() {
        panic!(
            "bare_clone: git clone --bare failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

fn run_git(path: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .unwrap_or_else(|e| panic!("repo_with_tree: failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "repo_with_tree: `git {args:?}` failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
