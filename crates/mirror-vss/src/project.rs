//! Structural mutation of a VSS project tree

use std::path::{Path, PathBuf};

use mirror_tree::{Entry, EntryKind, TargetProject};

use crate::listing::parse_dir_listing;
use crate::session::{ERR_VSS, VssSession};
use crate::{Error, Result};

/// Longest project path `ss` accepts, including the file name.
pub const MAX_PROJECT_PATH: usize = 259;

/// A VSS project and the working folder it is mirrored into.
///
/// `work_root` is the Git checkout: `ss add` resolves on-disk files
/// relative to the process working directory, so structural adds run
/// with their cwd inside the checkout. Deletions and listings only
/// touch the project database and run from `work_root`, which always
/// exists even when the entry is gone from disk.
pub struct VssProject {
    session: VssSession,
    project_root: String,
    work_root: PathBuf,
}

impl VssProject {
    pub fn new(
        session: VssSession,
        project_root: impl Into<String>,
        work_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            session,
            project_root: project_root.into(),
            work_root: work_root.into(),
        }
    }

    /// `$/Project/<dir>` with forward-slash separators
    fn project_path(&self, dir: &Path) -> String {
        let mut path = self.project_root.clone();
        for component in dir.components() {
            path.push('/');
            path.push_str(&component.as_os_str().to_string_lossy());
        }
        path
    }

    fn work_dir(&self, dir: &Path) -> PathBuf {
        self.work_root.join(dir)
    }

    /// `ss cp` — set the current project before a structural command
    fn enter(&self, project: &str, cwd: &Path) -> Result<()> {
        self.session.run(cwd, &["cp", project])?;
        Ok(())
    }

    fn ensure_path_fits(&self, project: &str, name: &str) -> Result<()> {
        let full = format!("{project}/{name}");
        if full.len() > MAX_PROJECT_PATH {
            return Err(Error::PathTooLong {
                path: full,
                limit: MAX_PROJECT_PATH,
            });
        }
        Ok(())
    }

    fn children(&self, dir: &Path) -> Result<Vec<Entry>> {
        let project = self.project_path(dir);
        self.enter(&project, &self.work_root)?;
        let output = self.session.run(&self.work_root, &["dir", "-F"])?;
        Ok(parse_dir_listing(&String::from_utf8_lossy(&output.stdout)))
    }

    fn add(&self, dir: &Path, name: &str, kind: EntryKind) -> Result<()> {
        let project = self.project_path(dir);
        self.ensure_path_fits(&project, name)?;
        let cwd = self.work_dir(dir);
        self.enter(&project, &cwd)?;
        match kind {
            EntryKind::File => self.session.run(&cwd, &["add", name, "-C-", "-I-"])?,
            // -R registers the directory and its on-disk contents in one pass.
            EntryKind::Dir => self.session.run(&cwd, &["add", name, "-R", "-C-", "-I-"])?,
        };
        tracing::debug!(project = %project, name, kind = kind.label(), "Added entry");
        Ok(())
    }

    fn delete(&self, dir: &Path, name: &str, kind: EntryKind) -> Result<()> {
        let project = self.project_path(dir);
        self.enter(&project, &self.work_root)?;
        self.session
            .run(&self.work_root, &["delete", name, "-S", "-I-Y"])?;
        tracing::debug!(project = %project, name, kind = kind.label(), "Deleted entry");
        Ok(())
    }

    /// Recursive non-destructive checkout of the whole project.
    ///
    /// `-G-` keeps local files, so content merged in from Git survives.
    /// The client reports failure when the project is checked out from
    /// another working folder; the partial checkout is then undone
    /// before the error is surfaced.
    pub fn checkout_all(&self) -> Result<()> {
        let args = ["checkout", self.project_root.as_str(), "-R", "-G-"];
        match self.session.run(&self.work_root, &args) {
            Ok(_) => Ok(()),
            Err(Error::CommandFailed { code, .. }) if code == ERR_VSS => {
                let undo_args = [
                    "undocheckout",
                    self.project_root.as_str(),
                    "-R",
                    "-G-",
                    "-I-Y",
                ];
                if let Err(undo) = self.session.run(&self.work_root, &undo_args) {
                    tracing::warn!(error = %undo, "Rollback of partial checkout failed");
                }
                Err(Error::CheckedOutElsewhere {
                    project: self.project_root.clone(),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Recursive checkin of the whole project.
    pub fn checkin_all(&self) -> Result<()> {
        let args = ["checkin", self.project_root.as_str(), "-R", "-C-"];
        self.session.run(&self.work_root, &args)?;
        Ok(())
    }
}

impl TargetProject for VssProject {
    fn list_children(&mut self, dir: &Path) -> mirror_tree::Result<Vec<Entry>> {
        self.children(dir).map_err(mirror_tree::Error::backend)
    }

    fn add_entry(&mut self, dir: &Path, name: &str, kind: EntryKind) -> mirror_tree::Result<()> {
        self.add(dir, name, kind).map_err(mirror_tree::Error::backend)
    }

    fn delete_entry(&mut self, dir: &Path, name: &str, kind: EntryKind) -> mirror_tree::Result<()> {
        self.delete(dir, name, kind)
            .map_err(mirror_tree::Error::backend)
    }

    fn checkout(&mut self) -> mirror_tree::Result<()> {
        self.checkout_all().map_err(mirror_tree::Error::backend)
    }

    fn checkin(&mut self) -> mirror_tree::Result<()> {
        self.checkin_all().map_err(mirror_tree::Error::backend)
    }
}
