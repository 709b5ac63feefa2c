//! # Configuration
//!
//! Tasklog configuration is managed by [`confique`], loaded in priority order:
//!
//! 1. **Environment variables**: `TASKLOG_ACTIVE_SECTION`, `TASKLOG_CHECKPOINTS`, etc.
//! 2. **Workspace Config**: `<workspace>/tasklog.toml`.
//! 3. **Compiled Defaults**: `#[config(default = ...)]` below.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `current_file` | `current.md` | Document holding the active and queued weeks |
//! | `backlog_file` | `backlog.md` | Document holding the backlog |
//! | `archive_file` | `archive.md` | Document receiving archived weeks |
//! | `active_section` | `This Week` | Section archived and rebuilt on rollover |
//! | `queued_section` | `Next Week` | Section promoted on rollover |
//! | `backlog_section` | `Backlog` | Section new backlog tasks go to |
//! | `checkpoints` | `true` | Commit the workspace to git after every change |

use crate::error::Result;
use crate::model::Destination;
use crate::store::DocFiles;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILENAME: &str = "tasklog.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TasklogConfig {
    #[config(env = "TASKLOG_CURRENT_FILE", default = "current.md")]
    pub current_file: String,

    #[config(env = "TASKLOG_BACKLOG_FILE", default = "backlog.md")]
    pub backlog_file: String,

    #[config(env = "TASKLOG_ARCHIVE_FILE", default = "archive.md")]
    pub archive_file: String,

    #[config(env = "TASKLOG_ACTIVE_SECTION", default = "This Week")]
    pub active_section: String,

    #[config(env = "TASKLOG_QUEUED_SECTION", default = "Next Week")]
    pub queued_section: String,

    #[config(env = "TASKLOG_BACKLOG_SECTION", default = "Backlog")]
    pub backlog_section: String,

    /// Commit the workspace to git after every change.
    #[config(env = "TASKLOG_CHECKPOINTS", default = true)]
    pub checkpoints: bool,
}

impl Default for TasklogConfig {
    fn default() -> Self {
        Self {
            current_file: "current.md".to_string(),
            backlog_file: "backlog.md".to_string(),
            archive_file: "archive.md".to_string(),
            active_section: "This Week".to_string(),
            queued_section: "Next Week".to_string(),
            backlog_section: "Backlog".to_string(),
            checkpoints: true,
        }
    }
}

impl TasklogConfig {
    /// Loads from the environment and `<workspace>/tasklog.toml` (if present).
    pub fn load(workspace: &Path) -> Result<Self> {
        let config = TasklogConfig::builder()
            .env()
            .file(workspace.join(CONFIG_FILENAME))
            .load()?;
        Ok(config)
    }

    pub fn files(&self) -> DocFiles {
        DocFiles {
            current: self.current_file.clone(),
            backlog: self.backlog_file.clone(),
            archive: self.archive_file.clone(),
        }
    }

    pub fn layout(&self) -> SectionLayout {
        SectionLayout {
            active: self.active_section.clone(),
            queued: self.queued_section.clone(),
            backlog: self.backlog_section.clone(),
        }
    }
}

/// Section titles the commands and the rollover work with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    pub active: String,
    pub queued: String,
    pub backlog: String,
}

impl Default for SectionLayout {
    fn default() -> Self {
        TasklogConfig::default().layout()
    }
}

impl SectionLayout {
    pub fn section_for(&self, destination: Destination) -> &str {
        match destination {
            Destination::CurrentWeek => &self.active,
            Destination::NextWeek => &self.queued,
            Destination::Backlog => &self.backlog,
        }
    }

    /// The destination a `(file, section)` pair corresponds to, if any.
    pub fn destination_of(&self, section: &str) -> Option<Destination> {
        let section = section.trim().to_lowercase();
        [
            Destination::CurrentWeek,
            Destination::NextWeek,
            Destination::Backlog,
        ]
        .into_iter()
        .find(|d| self.section_for(*d).to_lowercase() == section)
    }

    /// Initial text for the current document.
    pub fn current_template(&self) -> String {
        format!("# {}\n\n# {}\n", self.active, self.queued)
    }

    pub fn backlog_template(&self) -> String {
        format!("# {}\n", self.backlog)
    }
}
