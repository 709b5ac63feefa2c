use super::Checkpoint;
use crate::error::{Result, TasklogError};
use git2::{IndexAddOption, Repository, Signature, StatusOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const FALLBACK_NAME: &str = "tasklog";
const FALLBACK_EMAIL: &str = "tasklog@localhost";

/// Commits the whole workspace directory to the git repository rooted there.
pub struct GitCheckpoint {
    root: PathBuf,
}

impl GitCheckpoint {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Opens the repository at `root`, creating it if it does not exist yet.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if Repository::open(&root).is_err() {
            Repository::init(&root).map_err(|e| {
                TasklogError::from(e).context("Failed to initialize git repository")
            })?;
            info!(path = %root.display(), "initialized git repository");
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn repo(&self) -> Result<Repository> {
        Ok(Repository::open(&self.root)?)
    }
}

impl Checkpoint for GitCheckpoint {
    fn has_pending_changes(&self) -> Result<bool> {
        let repo = self.repo()?;
        let mut opts = StatusOptions::new();
        opts.include_untracked(true).recurse_untracked_dirs(true);
        let statuses = repo.statuses(Some(&mut opts))?;
        Ok(!statuses.is_empty())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let repo = self.repo()?;

        let mut index = repo.index()?;
        index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
        // stage deletions too
        index.update_all(["*"].iter(), None)?;
        index.write()?;
        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        let parent = match repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(_) => None,
        };
        if let Some(parent) = &parent {
            if parent.tree_id() == tree_id {
                debug!(msg = message, "nothing to commit, skipping checkpoint");
                return Ok(());
            }
        }

        let sig = match repo.signature() {
            Ok(sig) => sig,
            Err(_) => Signature::now(FALLBACK_NAME, FALLBACK_EMAIL)?,
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        let oid = repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)?;
        info!(%oid, msg = message, "checkpoint committed");
        Ok(())
    }
}
