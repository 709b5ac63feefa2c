use super::Checkpoint;
use crate::error::{Result, TasklogError};
use std::cell::{Cell, RefCell};

/// Records checkpoint messages instead of committing anything.
#[derive(Debug, Default)]
pub struct MemCheckpoint {
    commits: RefCell<Vec<String>>,
    pending: Cell<bool>,
    fail: Cell<bool>,
}

impl MemCheckpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pending_changes(self) -> Self {
        self.pending.set(true);
        self
    }

    pub fn set_pending_changes(&self, pending: bool) {
        self.pending.set(pending);
    }

    /// Make every commit fail.
    pub fn set_fail(&self, fail: bool) {
        self.fail.set(fail);
    }

    pub fn commits(&self) -> Vec<String> {
        self.commits.borrow().clone()
    }
}

impl Checkpoint for MemCheckpoint {
    fn has_pending_changes(&self) -> Result<bool> {
        Ok(self.pending.get())
    }

    fn commit(&self, message: &str) -> Result<()> {
        if self.fail.get() {
            return Err(TasklogError::Store("Simulated commit failure".to_string()));
        }
        self.commits.borrow_mut().push(message.to_string());
        self.pending.set(false);
        Ok(())
    }
}
