use crate::checkpoint::Checkpoint;
use crate::clock::Clock;
use crate::commands::helpers::{locate_at, resolve_for_update};
use crate::commands::{CmdMessage, CmdResult};
use crate::edit;
use crate::error::Result;
use crate::model::TaskStatus;
use crate::store::DocumentStore;
use crate::workspace::Workspace;
use tracing::debug;

/// Sets the status of the task matching `identifier`. Only the checkbox changes.
pub fn run<S: DocumentStore, C: Checkpoint, K: Clock>(
    ws: &Workspace<S, C, K>,
    identifier: &str,
    status: TaskStatus,
) -> Result<CmdResult> {
    let (found, text) = resolve_for_update(&ws.store, identifier)?;
    if found.task.status == status {
        let mut result = CmdResult::default().with_affected_tasks(vec![found.clone()]);
        result.add_message(CmdMessage::info(format!(
            "\"{}\" was already {}",
            found.task.text, status
        )));
        return Ok(result);
    }

    let updated = edit::set_status(&text, found.line, status)?;
    ws.store.write(found.file, &updated)?;

    let verb = match status {
        TaskStatus::Completed => "Completed",
        TaskStatus::Closed => "Closed",
        TaskStatus::New => "Reopened",
    };
    ws.commit(&format!("{} task: {}", verb, found.task.text))?;
    debug!(file = %found.file, line = found.line, %status, "task status set");

    let mut result = CmdResult::default()
        .with_affected_tasks(locate_at(found.file, &updated, found.line).into_iter().collect());
    result.add_message(CmdMessage::success(format!(
        "{} \"{}\" in {}",
        verb, found.task.text, found.section
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::TasklogError;
    use crate::model::{DocId, Destination};
    use crate::test_utils::{empty_workspace, mem_workspace};

    #[test]
    fn add_then_finish() {
        let ws = empty_workspace();
        add::run(&ws, "Write tests", Destination::CurrentWeek, None).unwrap();
        let result = run(&ws, "write", TaskStatus::Completed).unwrap();

        assert_eq!(
            ws.store.get(DocId::Current).unwrap(),
            "# This Week\n- [x] Write tests\n\n# Next Week\n"
        );
        assert_eq!(
            ws.checkpoint.commits(),
            vec!["Added task: Write tests", "Completed task: Write tests"]
        );
        assert_eq!(result.affected_tasks[0].task.status, TaskStatus::Completed);
    }

    #[test]
    fn closes_backlog_task_keeping_its_date() {
        let ws = mem_workspace(
            "# This Week\n\n# Next Week\n",
            "# Backlog\n- [ ] Learn Go added on 2024-01-15\n  maybe\n",
            "",
        );
        run(&ws, "learn", TaskStatus::Closed).unwrap();
        assert_eq!(
            ws.store.get(DocId::Backlog).unwrap(),
            "# Backlog\n- [-] Learn Go added on 2024-01-15\n  maybe\n"
        );
        assert_eq!(ws.checkpoint.commits(), vec!["Closed task: Learn Go"]);
    }

    #[test]
    fn ambiguous_identifier_changes_nothing() {
        let ws = mem_workspace(
            "# This Week\n- [ ] Fix bug\n\n# Next Week\n- [ ] Fix docs\n",
            "# Backlog\n",
            "",
        );
        let err = run(&ws, "fix", TaskStatus::Completed).unwrap_err();
        assert!(matches!(err, TasklogError::AmbiguousMatch { .. }));
        assert!(ws.store.writes().is_empty());
        assert!(ws.checkpoint.commits().is_empty());
    }

    #[test]
    fn finishing_twice_reports_info_without_writing() {
        let ws = mem_workspace("# This Week\n- [x] Done\n", "# Backlog\n", "");
        let result = run(&ws, "done", TaskStatus::Completed).unwrap();
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Info);
        assert_eq!(result.messages[0].content, "\"Done\" was already completed");
        assert_eq!(result.affected_tasks[0].task.status, TaskStatus::Completed);
        assert!(ws.store.writes().is_empty());
        assert!(ws.checkpoint.commits().is_empty());
    }

    #[test]
    fn reopening_a_task() {
        let ws = mem_workspace("# This Week\n- [-] Dropped\n", "# Backlog\n", "");
        run(&ws, "dropped", TaskStatus::New).unwrap();
        assert_eq!(ws.store.get(DocId::Current).unwrap(), "# This Week\n- [ ] Dropped\n");
        assert_eq!(ws.checkpoint.commits(), vec!["Reopened task: Dropped"]);
    }
}
