use crate::edit::ensure_line;
use crate::error::Result;
use crate::locate::{resolve_unique, tasks_in};
use crate::model::{DocId, TaskMatch};
use crate::store::DocumentStore;

/// Resolves `identifier` and returns the match with the current text of its document,
/// already checked to still hold the task at the matched line.
pub fn resolve_for_update<S: DocumentStore>(
    store: &S,
    identifier: &str,
) -> Result<(TaskMatch, String)> {
    let found = resolve_unique(store, identifier)?;
    let text = store.read(found.file)?;
    ensure_line(&text, found.line, &found.raw_line)?;
    Ok((found, text))
}

/// The last task in `section` of `text` stored as `raw_line`.
///
/// Used to report where a task ended up after it was written.
pub fn locate_written(
    file: DocId,
    text: &str,
    section: &str,
    raw_line: &str,
) -> Option<TaskMatch> {
    let section = section.trim().to_lowercase();
    tasks_in(file, text)
        .into_iter()
        .filter(|m| m.raw_line == raw_line && m.section.to_lowercase() == section)
        .last()
}

/// The task at `line` of `text`, after an in-place edit.
pub fn locate_at(file: DocId, text: &str, line: usize) -> Option<TaskMatch> {
    tasks_in(file, text).into_iter().find(|m| m.line == line)
}
