//! # API Facade
//!
//! [`TasklogApi`] is the single entry point for every tasklog operation. The CLI, the
//! tool dispatcher and the integration tests all go through it.
//!
//! The facade only normalizes inputs and forwards to `commands/*.rs`. It holds no
//! logic of its own and never prints.
//!
//! ## Generic Over Collaborators
//!
//! `TasklogApi<S, C, K>` is generic over the document store, the checkpoint and the
//! clock:
//! - Production: `TasklogApi<FsStore, Box<dyn Checkpoint>, SystemClock>`
//! - Testing: `TasklogApi<MemStore, MemCheckpoint, FixedClock>`
//!
//! ## Concurrency
//!
//! Operations are read-modify-write over whole documents. One process at a time is
//! assumed; mutating methods take `&mut self` so a single facade cannot interleave them.

use crate::checkpoint::Checkpoint;
use crate::clock::Clock;
use crate::commands;
use crate::commands::update::TaskEdit;
use crate::error::Result;
use crate::locate;
use crate::model::{Destination, TaskMatch, TaskStatus};
use crate::store::DocumentStore;
use crate::workspace::Workspace;

pub struct TasklogApi<S, C, K> {
    workspace: Workspace<S, C, K>,
}

impl<S: DocumentStore, C: Checkpoint, K: Clock> TasklogApi<S, C, K> {
    pub fn new(workspace: Workspace<S, C, K>) -> Self {
        Self { workspace }
    }

    pub fn workspace(&self) -> &Workspace<S, C, K> {
        &self.workspace
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&self.workspace)
    }

    pub fn add_task(
        &mut self,
        text: &str,
        destination: Destination,
        description: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&self.workspace, text, destination, description)
    }

    pub fn finish_task(
        &mut self,
        identifier: &str,
        status: TaskStatus,
    ) -> Result<commands::CmdResult> {
        commands::finish::run(&self.workspace, identifier, status)
    }

    pub fn edit_task(
        &mut self,
        identifier: &str,
        text: Option<&str>,
        description: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let changes = TaskEdit {
            text: text.map(str::to_string),
            description: description.map(str::to_string),
        };
        commands::update::run(&self.workspace, identifier, &changes)
    }

    pub fn move_task(
        &mut self,
        identifier: &str,
        destination: Destination,
    ) -> Result<commands::CmdResult> {
        commands::move_task::run(&self.workspace, identifier, destination)
    }

    pub fn get_tasks(&self, destination: Option<Destination>) -> Result<commands::CmdResult> {
        commands::list::run(&self.workspace, destination)
    }

    pub fn start_week(&mut self) -> Result<commands::CmdResult> {
        commands::start_week::run(&self.workspace)
    }

    /// Every task whose text contains `identifier`, ignoring case.
    pub fn find_tasks(&self, identifier: &str) -> Result<Vec<TaskMatch>> {
        locate::find_matching(&self.workspace.store, identifier)
    }
}
