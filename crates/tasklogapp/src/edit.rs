//! # Task Mutators
//!
//! Every mutator takes a whole document and returns a whole new one. Tasks are
//! addressed by their 1-based line number in the full document.
//!
//! A line number is only meaningful for the text it was computed from. Callers that
//! located a task earlier should run [`ensure_line`] against the text they are about to
//! rewrite; it fails with `StaleMatch` if the line no longer holds the same task.
//!
//! ## Block Shape
//!
//! A task and its description lines form one block. Deleting removes the block as a
//! unit. Inserting appends the block at the end of a section (after dropping trailing
//! blank lines) and leaves exactly one blank line after it.

use crate::document::{
    find_section, join_lines, parse_sections, replace_section_content, split_lines,
    trim_trailing_blank,
};
use crate::error::{Result, TasklogError};
use crate::model::{Task, TaskStatus};
use crate::task_line::{
    checkbox, description_run, format_task_line, indent_description, parse_task_line,
    render_task, strip_description, TaskLine,
};

/// Appends a new task to the end of `section_title`.
pub fn add_task(
    document: &str,
    section_title: &str,
    text: &str,
    description: Option<&str>,
    status: TaskStatus,
) -> Result<String> {
    validate_text(text)?;
    let mut block = vec![format_task_line(status, text)];
    if let Some(desc) = description {
        block.extend(indent_description(desc));
    }
    insert_block(document, section_title, block)
}

/// Appends a fully formed task (status, description) to the end of `section_title`,
/// storing it with `stored_text` as its visible text.
pub fn insert_task(
    document: &str,
    section_title: &str,
    task: &Task,
    stored_text: &str,
) -> Result<String> {
    validate_text(stored_text)?;
    insert_block(document, section_title, render_task(task, stored_text))
}

fn insert_block(document: &str, section_title: &str, block: Vec<String>) -> Result<String> {
    let sections = parse_sections(document);
    let section = find_section(&sections, section_title)
        .ok_or_else(|| TasklogError::SectionNotFound(section_title.to_string()))?;

    let mut content = section.content.clone();
    trim_trailing_blank(&mut content);
    content.extend(block);
    content.push(String::new());

    let lines = split_lines(document);
    Ok(join_lines(&replace_section_content(&lines, section, content)))
}

pub fn set_status(document: &str, line_number: usize, status: TaskStatus) -> Result<String> {
    let mut lines = split_lines(document);
    let (idx, _) = task_at(&lines, line_number)?;
    let rest = lines[idx][checkbox(status).len()..].to_string();
    lines[idx] = format!("{}{}", checkbox(status), rest);
    Ok(join_lines(&lines))
}

pub fn set_text(document: &str, line_number: usize, new_text: &str) -> Result<String> {
    validate_text(new_text)?;
    let mut lines = split_lines(document);
    let (idx, parsed) = task_at(&lines, line_number)?;
    lines[idx] = format_task_line(parsed.status, new_text);
    Ok(join_lines(&lines))
}

/// Replaces the description block. `None` or a blank string clears it.
pub fn set_description(
    document: &str,
    line_number: usize,
    new_description: Option<&str>,
) -> Result<String> {
    let mut lines = split_lines(document);
    let (idx, _) = task_at(&lines, line_number)?;
    let existing = description_run(&lines, idx + 1).len();
    let replacement = new_description.map(indent_description).unwrap_or_default();
    lines.splice(idx + 1..idx + 1 + existing, replacement);
    Ok(join_lines(&lines))
}

/// Removes the task line and its description block.
pub fn remove_task(document: &str, line_number: usize) -> Result<String> {
    let mut lines = split_lines(document);
    let (idx, _) = task_at(&lines, line_number)?;
    let existing = description_run(&lines, idx + 1).len();
    lines.drain(idx..idx + 1 + existing);
    Ok(join_lines(&lines))
}

/// Reads the task block at `line_number`. No backlog suffix handling is done here.
pub fn read_task(document: &str, line_number: usize) -> Result<Task> {
    let lines = split_lines(document);
    let (idx, parsed) = task_at(&lines, line_number)?;
    let description = strip_description(description_run(&lines, idx + 1));
    Ok(Task::new(parsed.text)
        .with_status(parsed.status)
        .with_description(description))
}

/// Fails with `StaleMatch` unless `line_number` still holds `expected`.
pub fn ensure_line(document: &str, line_number: usize, expected: &str) -> Result<()> {
    let lines = split_lines(document);
    match line_number.checked_sub(1).and_then(|idx| lines.get(idx)) {
        Some(line) if line == expected => Ok(()),
        _ => Err(TasklogError::StaleMatch {
            line: line_number,
            expected: expected.to_string(),
        }),
    }
}

fn task_at(lines: &[String], line_number: usize) -> Result<(usize, TaskLine)> {
    if line_number == 0 || line_number > lines.len() {
        return Err(TasklogError::LineNotFound {
            line: line_number,
            len: lines.len(),
        });
    }
    let idx = line_number - 1;
    let parsed = parse_task_line(&lines[idx]).ok_or(TasklogError::NotATask(line_number))?;
    Ok((idx, parsed))
}

/// Task text must be one non-blank line.
pub fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(TasklogError::Api("Task text cannot be empty".to_string()));
    }
    if text.contains('\n') {
        return Err(TasklogError::Api(
            "Task text must be a single line, use the description for details".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT: &str = "# This Week\n- [ ] A\n\n# Next Week\n";

    #[test]
    fn add_appends_to_section() {
        let out = add_task(CURRENT, "This Week", "B", None, TaskStatus::New).unwrap();
        assert_eq!(out, "# This Week\n- [ ] A\n- [ ] B\n\n# Next Week\n");
    }

    #[test]
    fn add_matches_section_case_insensitively() {
        let out = add_task(CURRENT, "next week", "C", None, TaskStatus::New).unwrap();
        assert_eq!(out, "# This Week\n- [ ] A\n\n# Next Week\n- [ ] C\n");
    }

    #[test]
    fn add_with_description_and_status() {
        let out = add_task(
            CURRENT,
            "This Week",
            "B",
            Some("line one\nline two"),
            TaskStatus::Completed,
        )
        .unwrap();
        assert_eq!(
            out,
            "# This Week\n- [ ] A\n- [x] B\n  line one\n  line two\n\n# Next Week\n"
        );
    }

    #[test]
    fn add_collapses_trailing_blank_lines() {
        let doc = "# This Week\n- [ ] A\n\n\n\n# Next Week\n";
        let out = add_task(doc, "This Week", "B", None, TaskStatus::New).unwrap();
        assert_eq!(out, "# This Week\n- [ ] A\n- [ ] B\n\n# Next Week\n");
    }

    #[test]
    fn add_into_section_without_trailing_newline() {
        let out = add_task("# Backlog\n- [ ] A", "Backlog", "B", None, TaskStatus::New).unwrap();
        assert_eq!(out, "# Backlog\n- [ ] A\n- [ ] B\n");
    }

    #[test]
    fn add_to_missing_section_fails() {
        let err = add_task(CURRENT, "Someday", "B", None, TaskStatus::New).unwrap_err();
        assert!(matches!(err, TasklogError::SectionNotFound(ref t) if t == "Someday"));
    }

    #[test]
    fn add_to_document_without_sections_fails() {
        let err = add_task("", "This Week", "B", None, TaskStatus::New).unwrap_err();
        assert!(matches!(err, TasklogError::SectionNotFound(_)));
    }

    #[test]
    fn add_rejects_blank_or_multiline_text() {
        assert!(add_task(CURRENT, "This Week", "  ", None, TaskStatus::New).is_err());
        assert!(add_task(CURRENT, "This Week", "a\nb", None, TaskStatus::New).is_err());
    }

    #[test]
    fn set_status_changes_only_the_checkbox() {
        let doc = "# This Week\n- [ ] A  \n  details\n";
        let out = set_status(doc, 2, TaskStatus::Closed).unwrap();
        assert_eq!(out, "# This Week\n- [-] A  \n  details\n");
    }

    #[test]
    fn set_status_out_of_range() {
        let err = set_status(CURRENT, 99, TaskStatus::Completed).unwrap_err();
        assert!(matches!(err, TasklogError::LineNotFound { line: 99, .. }));
        let err = set_status(CURRENT, 0, TaskStatus::Completed).unwrap_err();
        assert!(matches!(err, TasklogError::LineNotFound { line: 0, .. }));
    }

    #[test]
    fn set_status_on_non_task_line() {
        let err = set_status(CURRENT, 1, TaskStatus::Completed).unwrap_err();
        assert!(matches!(err, TasklogError::NotATask(1)));
    }

    #[test]
    fn set_text_keeps_status_and_description() {
        let doc = "# This Week\n- [x] Old\n  details\n";
        let out = set_text(doc, 2, "New").unwrap();
        assert_eq!(out, "# This Week\n- [x] New\n  details\n");
    }

    #[test]
    fn set_description_replaces_whole_block() {
        let doc = "# This Week\n- [ ] A\n  one\n  two\n  three\n- [ ] B\n";
        let out = set_description(doc, 2, Some("fresh")).unwrap();
        assert_eq!(out, "# This Week\n- [ ] A\n  fresh\n- [ ] B\n");
    }

    #[test]
    fn set_description_adds_when_missing() {
        let out = set_description(CURRENT, 2, Some("a\nb")).unwrap();
        assert_eq!(out, "# This Week\n- [ ] A\n  a\n  b\n\n# Next Week\n");
    }

    #[test]
    fn clearing_description_with_none_or_blank() {
        let doc = "# This Week\n- [ ] A\n  one\n  two\n\n# Next Week\n";
        let cleared = "# This Week\n- [ ] A\n\n# Next Week\n";
        assert_eq!(set_description(doc, 2, None).unwrap(), cleared);
        assert_eq!(set_description(doc, 2, Some("")).unwrap(), cleared);
        assert_eq!(set_description(doc, 2, Some("  \n ")).unwrap(), cleared);
    }

    #[test]
    fn remove_takes_description_with_it() {
        let doc = "# This Week\n- [ ] A\n  one\n  two\n- [ ] B\n\n# Next Week\n";
        let out = remove_task(doc, 2).unwrap();
        assert_eq!(out, "# This Week\n- [ ] B\n\n# Next Week\n");
    }

    #[test]
    fn remove_leaves_no_gap() {
        let doc = "# This Week\n- [ ] A\n- [ ] B\n- [ ] C\n";
        assert_eq!(remove_task(doc, 3).unwrap(), "# This Week\n- [ ] A\n- [ ] C\n");
    }

    #[test]
    fn insert_then_remove_restores_document() {
        let inserted = add_task(CURRENT, "This Week", "B", Some("note"), TaskStatus::New).unwrap();
        let line = split_lines(&inserted)
            .iter()
            .position(|l| l == "- [ ] B")
            .unwrap()
            + 1;
        assert_eq!(remove_task(&inserted, line).unwrap(), CURRENT);
    }

    #[test]
    fn remove_rejects_non_task() {
        assert!(matches!(
            remove_task(CURRENT, 3).unwrap_err(),
            TasklogError::NotATask(3)
        ));
    }

    #[test]
    fn read_task_collects_description() {
        let doc = "# This Week\n- [-] A\n  one\n    nested\n\n";
        let task = read_task(doc, 2).unwrap();
        assert_eq!(task.status, TaskStatus::Closed);
        assert_eq!(task.text, "A");
        assert_eq!(task.description, vec!["one", "  nested"]);
    }

    #[test]
    fn ensure_line_detects_changes() {
        assert!(ensure_line(CURRENT, 2, "- [ ] A").is_ok());
        assert!(matches!(
            ensure_line(CURRENT, 2, "- [ ] B").unwrap_err(),
            TasklogError::StaleMatch { line: 2, .. }
        ));
        assert!(ensure_line(CURRENT, 0, "- [ ] A").is_err());
        assert!(ensure_line(CURRENT, 42, "- [ ] A").is_err());
    }
}
