//! # Checkpoints
//!
//! Tasklog never rolls back a half-finished operation itself. Instead every mutating
//! command ends with a checkpoint commit, and the weekly rollover takes one before it
//! starts when there is uncommitted work. Recovery means going back to a checkpoint.
//!
//! - [`git::GitCheckpoint`]: commits the workspace directory to its git repository.
//! - [`memory::MemCheckpoint`]: records messages, for tests.
//! - [`NoCheckpoint`]: used when checkpoints are disabled in the configuration.
//!
//! Failures propagate to the caller, they are never swallowed.

use crate::error::Result;

pub mod git;
pub mod memory;

pub trait Checkpoint {
    /// Whether the workspace has changes not yet captured by a checkpoint.
    fn has_pending_changes(&self) -> Result<bool>;

    /// Record a checkpoint with the given message.
    fn commit(&self, message: &str) -> Result<()>;
}

/// Checkpointing switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCheckpoint;

impl Checkpoint for NoCheckpoint {
    fn has_pending_changes(&self) -> Result<bool> {
        Ok(false)
    }

    fn commit(&self, _message: &str) -> Result<()> {
        Ok(())
    }
}

impl<C: Checkpoint + ?Sized> Checkpoint for Box<C> {
    fn has_pending_changes(&self) -> Result<bool> {
        (**self).has_pending_changes()
    }

    fn commit(&self, message: &str) -> Result<()> {
        (**self).commit(message)
    }
}
