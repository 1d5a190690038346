//! Shared test fixtures for the git-vss-mirror workspace

pub mod git;
pub mod tree;

pub use git::{bare_clone, real_git_repo, repo_with_tree};
pub use tree::build_tree;
