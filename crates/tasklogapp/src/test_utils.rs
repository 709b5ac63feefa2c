use crate::checkpoint::memory::MemCheckpoint;
use crate::clock::FixedClock;
use crate::config::SectionLayout;
use crate::model::DocId;
use crate::store::fs::FsStore;
use crate::store::memory::MemStore;
use crate::store::DocumentStore;
use crate::workspace::Workspace;
use chrono::NaiveDate;
use std::path::PathBuf;
use tempfile::TempDir;

pub type MemWorkspace = Workspace<MemStore, MemCheckpoint, FixedClock>;

/// Thursday 2024-02-01. Its week starts on Monday 2024-01-29.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid fixture date")
}

pub fn mem_workspace(current: &str, backlog: &str, archive: &str) -> MemWorkspace {
    Workspace::new(
        MemStore::with_documents(current, backlog, archive),
        MemCheckpoint::new(),
        FixedClock(today()),
    )
}

/// A workspace holding the freshly initialized templates.
pub fn empty_workspace() -> MemWorkspace {
    let layout = SectionLayout::default();
    mem_workspace(&layout.current_template(), &layout.backlog_template(), "")
}

pub struct TestEnv {
    // kept so the directory lives as long as the env
    pub _temp_dir: TempDir,
    pub store: FsStore,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let store = FsStore::new(root.clone());
        Self {
            _temp_dir: temp_dir,
            store,
            root,
        }
    }

    pub fn seed(&self, current: &str, backlog: &str, archive: &str) {
        for (doc, text) in [
            (DocId::Current, current),
            (DocId::Backlog, backlog),
            (DocId::Archive, archive),
        ] {
            self.store.write(doc, text).expect("failed to seed document");
        }
    }
}
