//! Run configuration for a synchronization pass

use std::path::PathBuf;

use mirror_tree::NameMatching;

/// Everything one synchronization run needs.
///
/// Built by the CLI from its arguments; there is no config file — the
/// tool is one-shot and holds no state between invocations.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Git repository URL with embedded credentials
    pub git_url: String,
    /// Branch to mirror
    pub git_branch: String,
    /// VSS project path (`$/Project`)
    pub vss_project: String,
    pub vss_user: String,
    pub vss_password: String,
    /// Tag to apply to the synchronized branch after a successful run
    pub git_tag: Option<String>,
    /// VSS database directory — where `srcsafe.ini` lives
    pub database: PathBuf,
    /// How entry names are matched across the two sides
    pub matching: NameMatching,
    /// Keep the temporary clone after a successful run
    pub keep_clone: bool,
}
