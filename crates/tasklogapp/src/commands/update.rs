use crate::checkpoint::Checkpoint;
use crate::clock::Clock;
use crate::commands::helpers::{locate_at, resolve_for_update};
use crate::commands::{CmdMessage, CmdResult};
use crate::edit;
use crate::error::{Result, TasklogError};
use crate::model::{with_date_suffix, DocId};
use crate::store::DocumentStore;
use crate::workspace::Workspace;
use serde::Deserialize;
use tracing::debug;

/// Changes to apply to a task. A blank `description` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskEdit {
    pub text: Option<String>,
    pub description: Option<String>,
}

impl TaskEdit {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.description.is_none()
    }
}

pub fn run<S: DocumentStore, C: Checkpoint, K: Clock>(
    ws: &Workspace<S, C, K>,
    identifier: &str,
    changes: &TaskEdit,
) -> Result<CmdResult> {
    if changes.is_empty() {
        return Err(TasklogError::Api(
            "Nothing to edit: provide new text or a new description".to_string(),
        ));
    }

    let (found, mut updated) = resolve_for_update(&ws.store, identifier)?;
    let mut final_text = found.task.text.clone();
    let mut summary = Vec::new();

    if let Some(new_text) = &changes.text {
        let new_text = new_text.trim();
        edit::validate_text(new_text)?;
        let stored = match (found.file, found.task.date_added) {
            (DocId::Backlog, Some(date)) => with_date_suffix(new_text, date),
            _ => new_text.to_string(),
        };
        updated = edit::set_text(&updated, found.line, &stored)?;
        final_text = new_text.to_string();
        summary.push("text updated");
    }

    if let Some(description) = &changes.description {
        updated = edit::set_description(&updated, found.line, Some(description))?;
        summary.push(if description.trim().is_empty() {
            "description cleared"
        } else {
            "description updated"
        });
    }

    ws.store.write(found.file, &updated)?;
    let summary = summary.join(", ");
    ws.commit(&format!("Edited task: {} - {}", final_text, summary))?;
    debug!(file = %found.file, line = found.line, summary = %summary, "task edited");

    let mut result = CmdResult::default()
        .with_affected_tasks(locate_at(found.file, &updated, found.line).into_iter().collect());
    result.add_message(CmdMessage::success(format!(
        "Edited \"{}\": {}",
        final_text, summary
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mem_workspace;

    const CURRENT: &str = "# This Week\n- [x] Old name\n  old note\n  more\n- [ ] Other\n\n# Next Week\n";
    const BACKLOG: &str = "# Backlog\n- [ ] Idea added on 2024-01-15\n";

    fn changes(text: Option<&str>, description: Option<&str>) -> TaskEdit {
        TaskEdit {
            text: text.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn renames_keeping_status_and_description() {
        let ws = mem_workspace(CURRENT, BACKLOG, "");
        let result = run(&ws, "old name", &changes(Some("New name"), None)).unwrap();
        assert_eq!(
            ws.store.get(DocId::Current).unwrap(),
            "# This Week\n- [x] New name\n  old note\n  more\n- [ ] Other\n\n# Next Week\n"
        );
        assert_eq!(
            ws.checkpoint.commits(),
            vec!["Edited task: New name - text updated"]
        );
        assert_eq!(result.affected_tasks[0].task.text, "New name");
    }

    #[test]
    fn replaces_description() {
        let ws = mem_workspace(CURRENT, BACKLOG, "");
        run(&ws, "old", &changes(None, Some("fresh"))).unwrap();
        assert_eq!(
            ws.store.get(DocId::Current).unwrap(),
            "# This Week\n- [x] Old name\n  fresh\n- [ ] Other\n\n# Next Week\n"
        );
        assert_eq!(
            ws.checkpoint.commits(),
            vec!["Edited task: Old name - description updated"]
        );
    }

    #[test]
    fn edits_both_at_once() {
        let ws = mem_workspace(CURRENT, BACKLOG, "");
        run(&ws, "old", &changes(Some("Renamed"), Some(""))).unwrap();
        assert_eq!(
            ws.store.get(DocId::Current).unwrap(),
            "# This Week\n- [x] Renamed\n- [ ] Other\n\n# Next Week\n"
        );
        assert_eq!(
            ws.checkpoint.commits(),
            vec!["Edited task: Renamed - text updated, description cleared"]
        );
    }

    #[test]
    fn backlog_rename_keeps_original_date() {
        let ws = mem_workspace(CURRENT, BACKLOG, "");
        let result = run(&ws, "idea", &changes(Some("Better idea"), None)).unwrap();
        assert_eq!(
            ws.store.get(DocId::Backlog).unwrap(),
            "# Backlog\n- [ ] Better idea added on 2024-01-15\n"
        );
        assert_eq!(result.affected_tasks[0].task.text, "Better idea");
    }

    #[test]
    fn nothing_to_edit_is_an_error() {
        let ws = mem_workspace(CURRENT, BACKLOG, "");
        let err = run(&ws, "old", &TaskEdit::default()).unwrap_err();
        assert!(matches!(err, TasklogError::Api(_)));
        assert!(ws.store.writes().is_empty());
    }

    #[test]
    fn blank_backlog_rename_is_rejected() {
        let ws = mem_workspace(CURRENT, BACKLOG, "");
        let err = run(&ws, "idea", &changes(Some("  "), None)).unwrap_err();
        assert!(matches!(err, TasklogError::Api(_)));
        assert_eq!(ws.store.get(DocId::Backlog).unwrap(), BACKLOG);
        assert!(ws.store.writes().is_empty());
        assert!(ws.checkpoint.commits().is_empty());
    }

    #[test]
    fn multiline_text_is_rejected() {
        let ws = mem_workspace(CURRENT, BACKLOG, "");
        assert!(run(&ws, "old", &changes(Some("a\nb"), None)).is_err());
        assert!(ws.store.writes().is_empty());
        assert!(ws.checkpoint.commits().is_empty());
    }
}
