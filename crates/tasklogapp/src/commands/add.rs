use crate::checkpoint::Checkpoint;
use crate::clock::Clock;
use crate::commands::helpers::locate_written;
use crate::commands::{CmdMessage, CmdResult};
use crate::edit;
use crate::error::Result;
use crate::model::{with_date_suffix, Destination, TaskStatus};
use crate::store::DocumentStore;
use crate::task_line::format_task_line;
use crate::workspace::Workspace;
use tracing::debug;

/// Appends a new open task to `destination`. Backlog tasks are stamped with today's date.
pub fn run<S: DocumentStore, C: Checkpoint, K: Clock>(
    ws: &Workspace<S, C, K>,
    text: &str,
    destination: Destination,
    description: Option<&str>,
) -> Result<CmdResult> {
    let text = text.trim();
    edit::validate_text(text)?;
    let doc = destination.doc();
    let section = ws.layout.section_for(destination);
    let stored_text = match destination {
        Destination::Backlog => with_date_suffix(text, ws.clock.today()),
        _ => text.to_string(),
    };

    let current = ws.store.read(doc)?;
    let updated = edit::add_task(&current, section, &stored_text, description, TaskStatus::New)?;
    ws.store.write(doc, &updated)?;
    ws.commit(&format!("Added task: {}", text))?;
    debug!(%doc, section, "task added");

    let raw_line = format_task_line(TaskStatus::New, &stored_text);
    let written = locate_written(doc, &updated, section, &raw_line);
    let mut result = CmdResult::default().with_affected_tasks(written.into_iter().collect());
    result.add_message(CmdMessage::success(format!(
        "Added \"{}\" to {}",
        text, destination
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TasklogError;
    use crate::model::DocId;
    use crate::test_utils::{empty_workspace, today};

    #[test]
    fn adds_to_current_week() {
        let ws = empty_workspace();
        let result = run(&ws, "Write tests", Destination::CurrentWeek, None).unwrap();

        assert_eq!(
            ws.store.get(DocId::Current).unwrap(),
            "# This Week\n- [ ] Write tests\n\n# Next Week\n"
        );
        assert_eq!(ws.checkpoint.commits(), vec!["Added task: Write tests"]);
        assert_eq!(result.affected_tasks.len(), 1);
        assert_eq!(result.affected_tasks[0].line, 2);
        assert_eq!(result.messages[0].content, "Added \"Write tests\" to current_week");
    }

    #[test]
    fn adds_to_next_week_with_description() {
        let ws = empty_workspace();
        run(&ws, "Plan", Destination::NextWeek, Some("agenda\nnotes")).unwrap();
        assert_eq!(
            ws.store.get(DocId::Current).unwrap(),
            "# This Week\n\n# Next Week\n- [ ] Plan\n  agenda\n  notes\n"
        );
    }

    #[test]
    fn backlog_tasks_get_a_date() {
        let ws = empty_workspace();
        let result = run(&ws, "Someday", Destination::Backlog, None).unwrap();
        assert_eq!(
            ws.store.get(DocId::Backlog).unwrap(),
            "# Backlog\n- [ ] Someday added on 2024-02-01\n"
        );
        let task = &result.affected_tasks[0].task;
        assert_eq!(task.text, "Someday");
        assert_eq!(task.date_added, Some(today()));
        assert_eq!(ws.checkpoint.commits(), vec!["Added task: Someday"]);
    }

    #[test]
    fn missing_section_fails_without_writing() {
        let ws = crate::test_utils::mem_workspace("# Notes\n", "# Backlog\n", "");
        let err = run(&ws, "A", Destination::CurrentWeek, None).unwrap_err();
        assert!(matches!(err, TasklogError::SectionNotFound(_)));
        assert!(ws.store.writes().is_empty());
        assert!(ws.checkpoint.commits().is_empty());
    }

    #[test]
    fn blank_text_is_rejected() {
        let ws = empty_workspace();
        assert!(run(&ws, "   ", Destination::CurrentWeek, None).is_err());
        assert!(ws.store.writes().is_empty());
    }

    #[test]
    fn blank_backlog_text_is_rejected_before_dating() {
        let ws = empty_workspace();
        let err = run(&ws, "   ", Destination::Backlog, None).unwrap_err();
        assert!(matches!(err, TasklogError::Api(_)));
        assert_eq!(ws.store.get(DocId::Backlog).unwrap(), "# Backlog\n");
        assert!(ws.store.writes().is_empty());
        assert!(ws.checkpoint.commits().is_empty());
    }

    #[test]
    fn commit_failure_is_reported_after_write() {
        let ws = empty_workspace();
        ws.checkpoint.set_fail(true);
        let err = run(&ws, "A", Destination::CurrentWeek, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to create checkpoint: Store error: Simulated commit failure"
        );
        assert_eq!(ws.store.writes(), vec![DocId::Current]);
    }
}
