//! VSS collaborator for git-vss-mirror
//!
//! Wraps the `ss` command-line client as a subprocess. [`VssSession`]
//! carries database location and credentials into every invocation;
//! [`VssProject`] implements [`mirror_tree::TargetProject`] on top of it:
//! structural add/delete, project listings, and the recursive
//! checkout/checkin content pass.

pub mod error;
pub mod listing;
pub mod project;
pub mod session;

pub use error::{Error, Result};
pub use listing::parse_dir_listing;
pub use project::{MAX_PROJECT_PATH, VssProject};
pub use session::{ERR_VSS, VssSession};
