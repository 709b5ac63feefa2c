//! # Command Layer
//!
//! One submodule per operation. Each exposes a `run` function taking the
//! [`Workspace`](crate::workspace::Workspace) and plain arguments, and returns a
//! [`CmdResult`]. Commands never print and never decide exit codes.
//!
//! Every mutating command follows the same cycle:
//!
//! 1. resolve the identifier with [`crate::locate::resolve_unique`]
//! 2. re-read the owning document and check the match with [`crate::edit::ensure_line`]
//! 3. compute the new text with the mutators in [`crate::edit`]
//! 4. write the whole document back
//! 5. take a checkpoint with a message describing the change
//!
//! Tests for the command logic live here and run against `MemStore` and
//! `MemCheckpoint`.

use crate::model::TaskMatch;
use serde::Serialize;

pub mod add;
pub mod finish;
pub mod helpers;
pub mod init;
pub mod list;
pub mod move_task;
pub mod start_week;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// A section's title and content lines, as returned by the weekly rollover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub title: String,
    pub content: Vec<String>,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct CmdResult {
    /// Tasks changed by the command, located in the documents as written.
    pub affected_tasks: Vec<TaskMatch>,
    pub listed_tasks: Vec<TaskMatch>,
    pub section: Option<SectionView>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_tasks(mut self, tasks: Vec<TaskMatch>) -> Self {
        self.affected_tasks = tasks;
        self
    }

    pub fn with_listed_tasks(mut self, tasks: Vec<TaskMatch>) -> Self {
        self.listed_tasks = tasks;
        self
    }

    pub fn with_section(mut self, section: SectionView) -> Self {
        self.section = Some(section);
        self
    }
}
