use crate::checkpoint::Checkpoint;
use crate::clock::Clock;
use crate::commands::helpers::{locate_written, resolve_for_update};
use crate::commands::{CmdMessage, CmdResult};
use crate::edit;
use crate::error::Result;
use crate::model::{Destination, TaskMatch};
use crate::store::DocumentStore;
use crate::task_line::format_task_line;
use crate::workspace::Workspace;
use tracing::debug;

/// Moves the task matching `identifier`, with its status and description, to the end
/// of `destination`.
///
/// The backlog date is dropped when leaving the backlog and set to today when entering
/// it. Across documents the destination is written before the source, so an
/// interruption leaves a duplicate rather than a lost task.
pub fn run<S: DocumentStore, C: Checkpoint, K: Clock>(
    ws: &Workspace<S, C, K>,
    identifier: &str,
    destination: Destination,
) -> Result<CmdResult> {
    let (found, source_text) = resolve_for_update(&ws.store, identifier)?;
    let target_doc = destination.doc();
    let target_section = ws.layout.section_for(destination);
    let source_label = source_label(ws, &found);

    if found.file == target_doc && found.section.to_lowercase() == target_section.to_lowercase() {
        let mut result = CmdResult::default().with_affected_tasks(vec![found.clone()]);
        result.add_message(CmdMessage::info(format!(
            "\"{}\" is already in {}",
            found.task.text, destination
        )));
        return Ok(result);
    }

    let mut task = found.task.clone();
    task.date_added = match destination {
        Destination::Backlog => Some(ws.clock.today()),
        _ => None,
    };
    let stored_text = task.stored_text();

    let without = edit::remove_task(&source_text, found.line)?;
    let written = if found.file == target_doc {
        let updated = edit::insert_task(&without, target_section, &task, &stored_text)?;
        ws.store.write(target_doc, &updated)?;
        updated
    } else {
        let target_text = ws.store.read(target_doc)?;
        let updated = edit::insert_task(&target_text, target_section, &task, &stored_text)?;
        ws.store.write(target_doc, &updated)?;
        ws.store.write(found.file, &without)?;
        updated
    };

    ws.commit(&format!(
        "Moved task: {} from {} to {}",
        task.text, source_label, destination
    ))?;
    debug!(from = %source_label, to = %destination, "task moved");

    let raw_line = format_task_line(task.status, &stored_text);
    let mut result = CmdResult::default().with_affected_tasks(
        locate_written(target_doc, &written, target_section, &raw_line)
            .into_iter()
            .collect(),
    );
    result.add_message(CmdMessage::success(format!(
        "Moved \"{}\" from {} to {}",
        task.text, source_label, destination
    )));
    Ok(result)
}

/// `current_week`, `next_week` or `backlog` for the known sections, the title otherwise.
fn source_label<S, C, K>(ws: &Workspace<S, C, K>, found: &TaskMatch) -> String {
    match ws.layout.destination_of(&found.section) {
        Some(d) if d.doc() == found.file => d.to_string(),
        _ => found.section.clone(),
    }
}
