//! The synchronization pipeline

use std::path::Path;

use mirror_git::GitCheckout;
use mirror_tree::{NameMatching, ReconcileStats, SourceTree, TargetProject, reconcile};
use mirror_vss::{VssProject, VssSession};

use crate::config::SyncConfig;
use crate::report::SyncReport;
use crate::Result;

/// Run one full synchronization pass.
///
/// The clone lands in a fresh temporary directory owned by this run.
/// On success it is removed unless `keep_clone` asks otherwise; on any
/// failure it is deliberately left on disk so the aborted state can be
/// inspected.
pub fn run_sync(config: &SyncConfig) -> Result<SyncReport> {
    let clone_dir = tempfile::TempDir::with_prefix("git-vss-mirror-")?;

    match sync_into(config, clone_dir.path()) {
        Ok(mut report) => {
            if config.keep_clone {
                report.clone_dir = Some(clone_dir.keep());
            }
            Ok(report)
        }
        Err(e) => {
            let kept = clone_dir.keep();
            tracing::warn!(path = %kept.display(), "Run failed; clone retained for inspection");
            Err(e)
        }
    }
}

fn sync_into(config: &SyncConfig, dest: &Path) -> Result<SyncReport> {
    tracing::info!(branch = %config.git_branch, "Cloning branch");
    let checkout = GitCheckout::clone_branch(&config.git_url, &config.git_branch, dest)?;

    let session = VssSession::new(
        config.database.clone(),
        config.vss_user.clone(),
        config.vss_password.clone(),
    );
    let mut project = VssProject::new(session, config.vss_project.clone(), checkout.root());

    let stats = sync_structure(&checkout, &mut project, config.matching)?;
    let mut report = SyncReport::new(
        config.git_branch.clone(),
        config.vss_project.clone(),
        stats,
    );

    if let Some(tag) = &config.git_tag {
        tracing::info!(tag, "Tagging synchronized branch");
        checkout.tag_and_push(tag)?;
        report.tag = Some(tag.clone());
    }

    Ok(report)
}

/// Content sync followed by structural reconciliation.
///
/// The non-destructive checkout/checkin pass propagates changed bytes of
/// files both sides already track; the reconciliation walk then makes
/// the membership match.
pub fn sync_structure(
    source: &dyn SourceTree,
    target: &mut dyn TargetProject,
    matching: NameMatching,
) -> Result<ReconcileStats> {
    tracing::info!("Checking out project for content sync");
    target.checkout()?;
    tracing::info!("Checking in modified files");
    target.checkin()?;
    tracing::info!("Reconciling tree structure");
    let stats = reconcile(source, target, matching)?;
    tracing::info!(
        dirs = stats.dirs_reconciled,
        operations = stats.operations(),
        "Reconciliation complete"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use mirror_tree::{Entry, EntryKind};
    use pretty_assertions::assert_eq;

    use super::*;

    /// Just enough of a source: one file at the root.
    struct OneFileTree;

    impl SourceTree for OneFileTree {
        fn list_children(&self, _dir: &Path) -> mirror_tree::Result<Vec<Entry>> {
            Ok(vec![Entry::file("readme.txt")])
        }
    }

    /// Records the order of content-sync and structural calls.
    #[derive(Default)]
    struct RecordingProject {
        log: Vec<String>,
    }

    impl TargetProject for RecordingProject {
        fn list_children(&mut self, _dir: &Path) -> mirror_tree::Result<Vec<Entry>> {
            self.log.push("list".to_string());
            Ok(Vec::new())
        }

        fn add_entry(
            &mut self,
            _dir: &Path,
            name: &str,
            _kind: EntryKind,
        ) -> mirror_tree::Result<()> {
            self.log.push(format!("add {name}"));
            Ok(())
        }

        fn delete_entry(
            &mut self,
            _dir: &Path,
            name: &str,
            _kind: EntryKind,
        ) -> mirror_tree::Result<()> {
            self.log.push(format!("delete {name}"));
            Ok(())
        }

        fn checkout(&mut self) -> mirror_tree::Result<()> {
            self.log.push("checkout".to_string());
            Ok(())
        }

        fn checkin(&mut self) -> mirror_tree::Result<()> {
            self.log.push("checkin".to_string());
            Ok(())
        }
    }

    #[test]
    fn content_sync_runs_before_reconciliation() {
        let mut project = RecordingProject::default();
        let stats = sync_structure(&OneFileTree, &mut project, NameMatching::Exact).unwrap();

        assert_eq!(
            project.log,
            vec!["checkout", "checkin", "list", "add readme.txt"]
        );
        assert_eq!(stats.files_added, 1);
        assert_eq!(stats.dirs_reconciled, 1);
    }

    #[test]
    fn failed_checkout_stops_the_pipeline() {
        struct RefusingProject;

        impl TargetProject for RefusingProject {
            fn list_children(&mut self, _dir: &Path) -> mirror_tree::Result<Vec<Entry>> {
                panic!("must not be reached");
            }
            fn add_entry(
                &mut self,
                _dir: &Path,
                _name: &str,
                _kind: EntryKind,
            ) -> mirror_tree::Result<()> {
                panic!("must not be reached");
            }
            fn delete_entry(
                &mut self,
                _dir: &Path,
                _name: &str,
                _kind: EntryKind,
            ) -> mirror_tree::Result<()> {
                panic!("must not be reached");
            }
            fn checkout(&mut self) -> mirror_tree::Result<()> {
                Err(mirror_tree::Error::backend(mirror_vss::Error::CheckedOutElsewhere {
                    project: "$/Project".to_string(),
                }))
            }
            fn checkin(&mut self) -> mirror_tree::Result<()> {
                panic!("must not be reached");
            }
        }

        let err = sync_structure(&OneFileTree, &mut RefusingProject, NameMatching::Exact)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Tree(mirror_tree::Error::Backend(_))
        ));
    }
}
