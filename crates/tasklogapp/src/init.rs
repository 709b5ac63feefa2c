//! # Workspace Resolution
//!
//! A tasklog workspace is a directory holding the three documents, an optional
//! `tasklog.toml`, and (with checkpoints on) a git repository.
//!
//! [`initialize`] resolves it explicitly, first match wins:
//!
//! 1. the `dir_override` argument (the CLI's `--dir`)
//! 2. the `TASKLOG_DIR` environment variable
//! 3. the OS data directory from [`directories::ProjectDirs`]
//!
//! The resulting [`TasklogContext`] owns the API and is passed around by the caller.
//! Nothing is kept in process-wide state.

use crate::api::TasklogApi;
use crate::checkpoint::git::GitCheckpoint;
use crate::checkpoint::{Checkpoint, NoCheckpoint};
use crate::clock::SystemClock;
use crate::config::TasklogConfig;
use crate::error::{Result, TasklogError};
use crate::store::fs::FsStore;
use crate::workspace::Workspace;
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub const DIR_ENV: &str = "TASKLOG_DIR";

pub type FsApi = TasklogApi<FsStore, Box<dyn Checkpoint>, SystemClock>;

pub struct TasklogContext {
    pub api: FsApi,
    pub root: PathBuf,
    pub config: TasklogConfig,
}

pub fn resolve_dir(dir_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = dir_override {
        return Ok(dir);
    }
    if let Some(dir) = env::var_os(DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "tasklog", "tasklog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            TasklogError::Store(format!(
                "Could not determine a data directory, pass --dir or set {}",
                DIR_ENV
            ))
        })
}

/// Builds the context for the resolved workspace.
///
/// With `create`, the directory is created when missing. With checkpoints enabled and
/// the directory present, its git repository is opened or initialized.
pub fn initialize(dir_override: Option<PathBuf>, create: bool) -> Result<TasklogContext> {
    let root = resolve_dir(dir_override)?;
    if create {
        fs::create_dir_all(&root).map_err(|e| {
            TasklogError::from(e).context(format!(
                "Failed to create workspace {}",
                root.display()
            ))
        })?;
    }

    let config = TasklogConfig::load(&root)?;
    debug!(root = %root.display(), checkpoints = config.checkpoints, "workspace resolved");

    let store = FsStore::new(&root).with_files(config.files());
    let checkpoint: Box<dyn Checkpoint> = if !config.checkpoints {
        Box::new(NoCheckpoint)
    } else if root.is_dir() {
        Box::new(GitCheckpoint::init(&root)?)
    } else {
        Box::new(GitCheckpoint::new(&root))
    };

    let workspace = Workspace::new(store, checkpoint, SystemClock).with_layout(config.layout());
    Ok(TasklogContext {
        api: TasklogApi::new(workspace),
        root,
        config,
    })
}
