//! # Storage Layer
//!
//! Tasklog persists three markdown documents and nothing else. The [`DocumentStore`]
//! trait is the only way the rest of the crate touches them.
//!
//! ## Contract
//!
//! - `read` returns the full text, or `DocumentNotFound` if the document does not exist.
//!   Missing documents are never treated as empty.
//! - `write` replaces the full text. There is no partial update.
//! - The three documents are written independently. There is no transaction across
//!   them; recovery from a crash mid-operation is the job of the checkpoint service.
//!
//! ## Implementations
//!
//! - [`fs::FsStore`]: markdown files in the workspace directory, atomic writes.
//! - [`memory::MemStore`]: for testing command logic without touching the filesystem.
//!
//! ## Storage Layout
//!
//! ```text
//! <workspace>/
//! ├── .git/           # checkpoint history (when enabled)
//! ├── tasklog.toml    # optional configuration
//! ├── current.md      # This Week / Next Week
//! ├── backlog.md      # Backlog
//! └── archive.md      # Week of YYYY-MM-DD, one per rollover
//! ```

use crate::error::Result;
use crate::model::DocId;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// File names for the three documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFiles {
    pub current: String,
    pub backlog: String,
    pub archive: String,
}

impl Default for DocFiles {
    fn default() -> Self {
        Self {
            current: "current.md".to_string(),
            backlog: "backlog.md".to_string(),
            archive: "archive.md".to_string(),
        }
    }
}

impl DocFiles {
    pub fn name(&self, doc: DocId) -> &str {
        match doc {
            DocId::Current => &self.current,
            DocId::Backlog => &self.backlog,
            DocId::Archive => &self.archive,
        }
    }
}

/// Abstract interface for document storage.
pub trait DocumentStore {
    /// Read the full text of a document.
    fn read(&self, doc: DocId) -> Result<String>;

    /// Replace the full text of a document, creating it if needed.
    fn write(&self, doc: DocId, text: &str) -> Result<()>;

    /// Whether the document exists.
    fn exists(&self, doc: DocId) -> bool;

    /// The path of the document (virtual for non-file stores).
    fn path(&self, doc: DocId) -> PathBuf;
}
