//! # Weekly Rollover
//!
//! Closes the active week and promotes the queued one. The state lives entirely in the
//! documents, the steps are:
//!
//! 1. Compute the archive key `Week of <monday>`.
//! 2. If the archive already has a section with exactly that title, stop. Nothing is
//!    written and no checkpoint is taken, so running the rollover twice in a week is
//!    harmless.
//! 3. Take a `Pre-start-week backup` checkpoint if there are uncommitted changes.
//! 4. Find the active and queued sections (`MissingSections` otherwise).
//! 5. Append the full active section to the archive under `# Week of <monday>`.
//! 6. Split the active section's tasks into finished and unfinished blocks, each block
//!    being a task line plus its description.
//! 7. Rewrite the current document: active header, unfinished blocks, the queued
//!    section's content, then an empty queued section. Other sections are kept after it.
//! 8. Take a `Completed week transition to <monday>` checkpoint.
//!
//! A failure after step 3 aborts the operation. Writes already made are not undone
//! here; the pre-rollover checkpoint is the way back.

use crate::checkpoint::Checkpoint;
use crate::clock::Clock;
use crate::config::SectionLayout;
use crate::document::{
    find_section, has_section_titled, join_lines, parse_sections, split_lines,
    trim_blank_edges, trim_trailing_blank,
};
use crate::error::{Result, ResultExt, TasklogError};
use crate::model::{archive_key, format_date, DocId, Section};
use crate::store::DocumentStore;
use crate::task_line::{description_run, parse_task_line};
use tracing::info;

pub const PRE_TRANSITION_MESSAGE: &str = "Pre-start-week backup";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RolloverOutcome {
    /// The week was archived by an earlier run.
    AlreadyArchived {
        archive_key: String,
        active_content: Vec<String>,
    },
    Transitioned {
        archive_key: String,
        active_content: Vec<String>,
        archived: usize,
        carried_over: usize,
    },
}

impl RolloverOutcome {
    pub fn archive_key(&self) -> &str {
        match self {
            RolloverOutcome::AlreadyArchived { archive_key, .. }
            | RolloverOutcome::Transitioned { archive_key, .. } => archive_key,
        }
    }

    pub fn active_content(&self) -> &[String] {
        match self {
            RolloverOutcome::AlreadyArchived { active_content, .. }
            | RolloverOutcome::Transitioned { active_content, .. } => active_content,
        }
    }
}

/// Task blocks of a section, split by completion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Partition {
    pub finished: Vec<Vec<String>>,
    pub unfinished: Vec<Vec<String>>,
}

pub fn partition_tasks(content: &[String]) -> Partition {
    let mut partition = Partition::default();
    let mut i = 0;
    while i < content.len() {
        let Some(parsed) = parse_task_line(&content[i]) else {
            i += 1;
            continue;
        };
        let description = description_run(content, i + 1);
        let mut block = Vec::with_capacity(1 + description.len());
        block.push(content[i].clone());
        block.extend_from_slice(description);
        i += block.len();

        if parsed.status.is_finished() {
            partition.finished.push(block);
        } else {
            partition.unfinished.push(block);
        }
    }
    partition
}

/// Archive text with `content` appended under `# {key}`.
pub fn append_to_archive(archive: &str, key: &str, content: &[String]) -> String {
    let mut lines = if archive.trim().is_empty() {
        Vec::new()
    } else {
        split_lines(archive)
    };
    trim_trailing_blank(&mut lines);
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!("# {}", key));
    let mut body = content.to_vec();
    trim_trailing_blank(&mut body);
    lines.extend(body);
    lines.push(String::new());
    join_lines(&lines)
}

/// The current document after a rollover, and the new active content.
fn rebuild_current(
    sections: &[Section],
    active: &Section,
    queued: &Section,
    unfinished: &[Vec<String>],
) -> (String, Vec<String>) {
    let mut active_content: Vec<String> = unfinished.iter().flatten().cloned().collect();
    active_content.extend(trim_blank_edges(&queued.content));

    let mut lines = vec![format!("# {}", active.title)];
    lines.extend(active_content.iter().cloned());
    lines.push(String::new());
    lines.push(format!("# {}", queued.title));
    lines.push(String::new());

    for other in sections
        .iter()
        .filter(|s| s.start_line != active.start_line && s.start_line != queued.start_line)
    {
        let mut content = other.content.clone();
        trim_trailing_blank(&mut content);
        lines.push(format!("# {}", other.title));
        lines.extend(content);
        lines.push(String::new());
    }

    (join_lines(&lines), active_content)
}

pub fn run_weekly_transition<S, C, K>(
    store: &S,
    checkpoint: &C,
    clock: &K,
    layout: &SectionLayout,
) -> Result<RolloverOutcome>
where
    S: DocumentStore,
    C: Checkpoint,
    K: Clock,
{
    let monday = clock.monday_of_current_week();
    let key = archive_key(monday);

    let archive = store
        .read(DocId::Archive)
        .context("Failed to read archive")?;
    if has_section_titled(&archive, &key) {
        info!(archive_key = %key, "week already archived, skipping rollover");
        let current = store
            .read(DocId::Current)
            .context("Failed to read current week")?;
        let active_content = find_section(&parse_sections(&current), &layout.active)
            .map(|s| trim_blank_edges(&s.content))
            .unwrap_or_default();
        return Ok(RolloverOutcome::AlreadyArchived {
            archive_key: key,
            active_content,
        });
    }

    if checkpoint
        .has_pending_changes()
        .context("Failed to check for uncommitted changes")?
    {
        checkpoint
            .commit(PRE_TRANSITION_MESSAGE)
            .context("Failed to create pre-start-week backup")?;
    }

    let current = store
        .read(DocId::Current)
        .context("Failed to read current week")?;
    let sections = parse_sections(&current);
    let (active, queued) = match (
        find_section(&sections, &layout.active),
        find_section(&sections, &layout.queued),
    ) {
        (Some(active), Some(queued)) => (active, queued),
        _ => {
            return Err(TasklogError::MissingSections {
                active: layout.active.clone(),
                queued: layout.queued.clone(),
            })
        }
    };

    let new_archive = append_to_archive(&archive, &key, &active.content);
    let partition = partition_tasks(&active.content);
    let (new_current, active_content) =
        rebuild_current(&sections, active, queued, &partition.unfinished);

    store
        .write(DocId::Archive, &new_archive)
        .context("Failed to write archive")?;
    store
        .write(DocId::Current, &new_current)
        .context("Failed to write current week")?;

    checkpoint
        .commit(&format!(
            "Completed week transition to {}",
            format_date(monday)
        ))
        .context("Failed to create checkpoint")?;

    info!(
        archive_key = %key,
        archived = partition.finished.len(),
        carried_over = partition.unfinished.len(),
        "week transition complete"
    );
    Ok(RolloverOutcome::Transitioned {
        archive_key: key,
        active_content,
        archived: partition.finished.len(),
        carried_over: partition.unfinished.len(),
    })
}
