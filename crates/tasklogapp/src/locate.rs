//! # Task Locator
//!
//! Resolves free-text identifiers to tasks in the `current` and `backlog` documents.
//!
//! Matching is a case-insensitive substring test on the task text (backlog date suffix
//! excluded), in document order: `current` first, then `backlog`. There is no ranking.
//!
//! ## Disambiguation
//!
//! [`resolve_unique`] is what every mutating tool goes through:
//!
//! | Matches | Outcome |
//! |---------|---------|
//! | 0 | `NoMatch`, with up to three example tasks as suggestions |
//! | 1 | the match |
//! | >1 | `AmbiguousMatch`, listing every candidate with its section |
//!
//! The line number carried by a [`TaskMatch`] is valid only for the document text it
//! was computed from. See [`crate::edit::ensure_line`].

use crate::document::parse_sections;
use crate::error::{Result, TasklogError};
use crate::model::{split_date_suffix, DocId, Task, TaskMatch};
use crate::store::DocumentStore;
use crate::task_line::{description_run, parse_task_line, strip_description};

const MAX_SUGGESTIONS: usize = 3;

/// The documents searched by the locator, in search order.
pub const SEARCHED_DOCS: [DocId; 2] = [DocId::Current, DocId::Backlog];

/// Every task in `text`, with absolute 1-based line numbers.
pub fn tasks_in(file: DocId, text: &str) -> Vec<TaskMatch> {
    let mut out = Vec::new();
    for section in parse_sections(text) {
        for (offset, line) in section.content.iter().enumerate() {
            let Some(parsed) = parse_task_line(line) else {
                continue;
            };
            let description = strip_description(description_run(&section.content, offset + 1));
            let (text, date_added) = if file == DocId::Backlog {
                split_date_suffix(&parsed.text)
            } else {
                (parsed.text.clone(), None)
            };
            let mut task = Task::new(text)
                .with_status(parsed.status)
                .with_description(description);
            task.date_added = date_added;

            out.push(TaskMatch {
                file,
                section: section.title.clone(),
                // header line, then content; +1 for 1-based
                line: section.start_line + 1 + offset + 1,
                raw_line: line.clone(),
                task,
            });
        }
    }
    out
}

pub fn find_all<S: DocumentStore>(store: &S) -> Result<Vec<TaskMatch>> {
    let mut all = Vec::new();
    for doc in SEARCHED_DOCS {
        let text = store.read(doc)?;
        all.extend(tasks_in(doc, &text));
    }
    Ok(all)
}

pub fn find_matching<S: DocumentStore>(store: &S, identifier: &str) -> Result<Vec<TaskMatch>> {
    filter_matching(find_all(store)?, identifier)
}

pub fn resolve_unique<S: DocumentStore>(store: &S, identifier: &str) -> Result<TaskMatch> {
    resolve_in(find_all(store)?, identifier)
}

/// Substring filter over an already collected task list.
pub fn filter_matching(tasks: Vec<TaskMatch>, identifier: &str) -> Result<Vec<TaskMatch>> {
    if identifier.trim().is_empty() {
        return Err(TasklogError::EmptyIdentifier);
    }
    let needle = identifier.to_lowercase();
    Ok(tasks
        .into_iter()
        .filter(|m| m.task.text.to_lowercase().contains(&needle))
        .collect())
}

/// The 0 / 1 / many branch over an already collected task list.
pub fn resolve_in(tasks: Vec<TaskMatch>, identifier: &str) -> Result<TaskMatch> {
    let suggestions: Vec<String> = tasks
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|m| m.task.text.clone())
        .collect();
    let mut matches = filter_matching(tasks, identifier)?;

    match matches.len() {
        0 => Err(TasklogError::NoMatch {
            identifier: identifier.to_string(),
            suggestions,
        }),
        1 => Ok(matches.remove(0)),
        _ => Err(TasklogError::AmbiguousMatch {
            identifier: identifier.to_string(),
            matches: matches
                .into_iter()
                .map(|m| (m.task.text, m.section))
                .collect(),
        }),
    }
}
