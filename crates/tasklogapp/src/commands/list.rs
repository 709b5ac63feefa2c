use crate::checkpoint::Checkpoint;
use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::locate::find_all;
use crate::model::Destination;
use crate::store::DocumentStore;
use crate::workspace::Workspace;

/// Every task in the current and backlog documents, in document order, optionally
/// limited to one destination.
pub fn run<S: DocumentStore, C: Checkpoint, K: Clock>(
    ws: &Workspace<S, C, K>,
    destination: Option<Destination>,
) -> Result<CmdResult> {
    let mut tasks = find_all(&ws.store)?;
    if let Some(destination) = destination {
        let section = ws.layout.section_for(destination).to_lowercase();
        tasks.retain(|m| m.file == destination.doc() && m.section.to_lowercase() == section);
    }
    Ok(CmdResult::default().with_listed_tasks(tasks))
}
