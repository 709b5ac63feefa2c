//! # Rendering
//!
//! Plain functions from result data to strings. Layout (alignment, padding) is computed
//! here with `unicode-width` so wide characters in task text don't break the columns.
//! The `_internal` variants take an explicit color switch for tests.

use super::styles;
use tasklogapp::commands::{CmdMessage, SectionView};
use tasklogapp::model::{format_date, TaskMatch};
use tasklogapp::task_line::checkbox;
use tasklogapp::tools::ToolName;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 80;
const TASK_INDENT: &str = "  ";
const DESCRIPTION_INDENT: &str = "        ";

pub fn render_task_list(tasks: &[TaskMatch]) -> String {
    render_task_list_internal(tasks, None)
}

fn render_task_list_internal(tasks: &[TaskMatch], use_color: Option<bool>) -> String {
    if tasks.is_empty() {
        return "No tasks yet, add one with `tasklog add`\n".to_string();
    }

    let mut out = String::new();
    let mut current_group: Option<(String, String)> = None;
    for m in tasks {
        let group = (m.file.to_string(), m.section.clone());
        if current_group.as_ref() != Some(&group) {
            if current_group.is_some() {
                out.push('\n');
            }
            out.push_str(&format!(
                "{}\n",
                styles::heading(use_color).apply_to(&m.section)
            ));
            current_group = Some(group);
        }
        out.push_str(&render_task_line(m, use_color));
        out.push('\n');
        for line in &m.task.description {
            out.push_str(&format!("{}{}\n", DESCRIPTION_INDENT, line));
        }
    }
    out
}

fn render_task_line(m: &TaskMatch, use_color: Option<bool>) -> String {
    let mut left = format!("{}{} {}", TASK_INDENT, checkbox(m.task.status), m.task.text);
    if let Some(date) = m.task.date_added {
        left.push_str(&format!("  (added {})", format_date(date)));
    }
    let location = format!("{}:{}", m.file, m.line);

    let used = left.width() + location.width();
    let padding = " ".repeat(LINE_WIDTH.saturating_sub(used).max(2));

    format!(
        "{}{}{}",
        styles::status(m.task.status, use_color).apply_to(left),
        padding,
        styles::muted(use_color).apply_to(location)
    )
}

pub fn render_section(section: &SectionView) -> String {
    render_section_internal(section, None)
}

fn render_section_internal(section: &SectionView, use_color: Option<bool>) -> String {
    let mut out = format!(
        "{}\n",
        styles::heading(use_color).apply_to(format!("# {}", section.title))
    );
    for line in &section.content {
        out.push_str(line);
        out.push('\n');
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    messages
        .iter()
        .map(|m| format!("{}\n", styles::level(m.level, use_color).apply_to(&m.content)))
        .collect()
}

pub fn render_tools() -> String {
    let width = ToolName::ALL
        .iter()
        .map(|t| t.name().width())
        .max()
        .unwrap_or(0);
    ToolName::ALL
        .iter()
        .map(|t| format!("{:<width$}  {}\n", t.name(), t.description(), width = width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tasklogapp::model::{DocId, Task, TaskStatus};

    fn task_match(text: &str, section: &str, file: DocId, line: usize) -> TaskMatch {
        TaskMatch {
            file,
            section: section.to_string(),
            line,
            raw_line: format!("- [ ] {}", text),
            task: Task::new(text),
        }
    }

    #[test]
    fn test_render_empty_list() {
        let output = render_task_list_internal(&[], Some(false));
        assert!(output.contains("No tasks yet"));
    }

    #[test]
    fn test_render_groups_by_section() {
        let tasks = vec![
            task_match("A", "This Week", DocId::Current, 2),
            task_match("B", "This Week", DocId::Current, 3),
            task_match("C", "Next Week", DocId::Current, 6),
        ];
        let output = render_task_list_internal(&tasks, Some(false));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "This Week");
        assert!(lines[1].starts_with("  - [ ] A"));
        assert!(lines[1].ends_with("current:2"));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Next Week");
    }

    #[test]
    fn test_render_aligns_locations() {
        let tasks = vec![
            task_match("short", "This Week", DocId::Current, 2),
            task_match("漢字のタスク", "This Week", DocId::Current, 3),
        ];
        let output = render_task_list_internal(&tasks, Some(false));
        for line in output.lines().skip(1) {
            assert_eq!(line.width(), LINE_WIDTH);
        }
    }

    #[test]
    fn test_render_description_and_date() {
        let mut m = task_match("Read", "Backlog", DocId::Backlog, 2);
        m.task = Task::new("Read")
            .with_status(TaskStatus::Completed)
            .with_date_added(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
            .with_description(vec!["chapter 3".into()]);
        let output = render_task_list_internal(&[m], Some(false));
        assert!(output.contains("- [x] Read  (added 2024-01-15)"));
        assert!(output.contains("        chapter 3\n"));
    }

    #[test]
    fn test_render_with_color_includes_ansi() {
        let tasks = vec![task_match("A", "This Week", DocId::Current, 2)];
        let output = render_task_list_internal(&tasks, Some(true));
        assert!(output.contains("\x1b["));
    }

    #[test]
    fn test_render_section() {
        let section = SectionView {
            title: "This Week".into(),
            content: vec!["- [ ] A".into()],
        };
        assert_eq!(
            render_section_internal(&section, Some(false)),
            "# This Week\n- [ ] A\n"
        );
    }

    #[test]
    fn test_render_messages() {
        let messages = vec![CmdMessage::success("Done"), CmdMessage::info("Note")];
        assert_eq!(
            render_messages_internal(&messages, Some(false)),
            "Done\nNote\n"
        );
        assert_eq!(render_messages_internal(&[], Some(false)), "");
    }

    #[test]
    fn test_render_tools_lists_every_tool() {
        let output = render_tools();
        assert_eq!(output.lines().count(), ToolName::ALL.len());
        assert!(output.contains("start_week"));
    }
}
