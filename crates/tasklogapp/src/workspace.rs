use crate::checkpoint::Checkpoint;
use crate::clock::Clock;
use crate::config::SectionLayout;
use crate::error::{Result, ResultExt};
use crate::store::DocumentStore;
use tracing::warn;

/// Everything an operation needs, passed explicitly instead of living in global state.
pub struct Workspace<S, C, K> {
    pub store: S,
    pub checkpoint: C,
    pub clock: K,
    pub layout: SectionLayout,
}

impl<S: DocumentStore, C: Checkpoint, K: Clock> Workspace<S, C, K> {
    pub fn new(store: S, checkpoint: C, clock: K) -> Self {
        Self {
            store,
            checkpoint,
            clock,
            layout: SectionLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: SectionLayout) -> Self {
        self.layout = layout;
        self
    }

    pub(crate) fn commit(&self, message: &str) -> Result<()> {
        self.checkpoint
            .commit(message)
            .inspect_err(|e| warn!(error = %e, msg = message, "checkpoint failed"))
            .context("Failed to create checkpoint")
    }
}
