use crate::checkpoint::Checkpoint;
use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ResultExt};
use crate::model::DocId;
use crate::store::DocumentStore;
use crate::workspace::Workspace;
use tracing::info;

pub const INIT_MESSAGE: &str = "Initialized tasklog workspace";

/// Creates any missing document from its template. Existing documents are never touched.
pub fn run<S: DocumentStore, C: Checkpoint, K: Clock>(
    ws: &Workspace<S, C, K>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for doc in DocId::ALL {
        let path = ws.store.path(doc);
        if ws.store.exists(doc) {
            result.add_message(CmdMessage::info(format!(
                "{} already exists, left unchanged",
                path.display()
            )));
            continue;
        }
        let template = match doc {
            DocId::Current => ws.layout.current_template(),
            DocId::Backlog => ws.layout.backlog_template(),
            DocId::Archive => String::new(),
        };
        ws.store.write(doc, &template)?;
        info!(%doc, path = %path.display(), "document created");
        result.add_message(CmdMessage::success(format!("Created {}", path.display())));
    }

    if ws
        .checkpoint
        .has_pending_changes()
        .context("Failed to check for uncommitted changes")?
    {
        ws.commit(INIT_MESSAGE)?;
    }
    Ok(result)
}
