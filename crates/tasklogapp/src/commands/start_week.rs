use crate::checkpoint::Checkpoint;
use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult, SectionView};
use crate::error::Result;
use crate::rollover::{run_weekly_transition, RolloverOutcome};
use crate::store::DocumentStore;
use crate::workspace::Workspace;

/// Runs the weekly rollover and reports the resulting active section.
pub fn run<S: DocumentStore, C: Checkpoint, K: Clock>(
    ws: &Workspace<S, C, K>,
) -> Result<CmdResult> {
    let outcome = run_weekly_transition(&ws.store, &ws.checkpoint, &ws.clock, &ws.layout)?;

    let mut result = CmdResult::default().with_section(SectionView {
        title: ws.layout.active.clone(),
        content: outcome.active_content().to_vec(),
    });
    match &outcome {
        RolloverOutcome::AlreadyArchived { archive_key, .. } => {
            result.add_message(CmdMessage::info(format!(
                "{} is already archived, nothing to do",
                archive_key
            )));
        }
        RolloverOutcome::Transitioned {
            archive_key,
            archived,
            carried_over,
            ..
        } => {
            result.add_message(CmdMessage::success(format!(
                "Archived {}: {} finished, {} carried over",
                archive_key, archived, carried_over
            )));
        }
    }
    Ok(result)
}
