//! Git collaborator for git-vss-mirror
//!
//! Clones the branch being mirrored, exposes the checkout as a
//! [`mirror_tree::SourceTree`], and applies the optional end-of-run tag.

pub mod checkout;
pub mod error;

pub use checkout::GitCheckout;
pub use error::{Error, Result};
