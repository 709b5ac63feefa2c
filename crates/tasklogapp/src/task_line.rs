//! # Task-Line Codec
//!
//! Reads and writes the single-line task syntax and the indented description block that
//! may follow it:
//!
//! ```text
//! - [x] Ship 0.3
//!   changelog is in the PR
//! ```
//!
//! Only ` `, `x` and `-` are recognized between the brackets. Any other line is simply
//! not a task, scanners skip it silently.
//!
//! [`description_run`] is the single definition of where a task's body ends. Insertion,
//! editing, deletion and the weekly rollover all go through it.

use crate::model::{Task, TaskStatus};
use once_cell::sync::Lazy;
use regex::Regex;

pub const DESCRIPTION_INDENT: &str = "  ";

static TASK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^- \[([ x-])\] (.*)$").expect("task line pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLine {
    pub status: TaskStatus,
    pub text: String,
}

pub fn parse_task_line(line: &str) -> Option<TaskLine> {
    let caps = TASK_LINE.captures(line)?;
    let status_char = caps[1].chars().next().unwrap_or(' ');
    Some(TaskLine {
        status: TaskStatus::from_char(status_char),
        text: caps[2].trim().to_string(),
    })
}

/// `"- [c]"` for the given status.
pub fn checkbox(status: TaskStatus) -> String {
    format!("- [{}]", status.as_char())
}

pub fn format_task_line(status: TaskStatus, text: &str) -> String {
    format!("{} {}", checkbox(status), text.trim())
}

pub fn is_description_line(line: &str) -> bool {
    line.starts_with(DESCRIPTION_INDENT) && !line.trim().is_empty()
}

/// The contiguous description lines starting at `start`.
pub fn description_run(lines: &[String], start: usize) -> &[String] {
    if start >= lines.len() {
        return &[];
    }
    let len = lines[start..]
        .iter()
        .take_while(|l| is_description_line(l))
        .count();
    &lines[start..start + len]
}

/// Description lines with the indent removed.
pub fn strip_description(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|l| {
            l.strip_prefix(DESCRIPTION_INDENT)
                .unwrap_or(l.as_str())
                .to_string()
        })
        .collect()
}

/// One indented line per non-blank input line. Blank input lines are dropped since
/// they would end the block.
pub fn indent_description(description: &str) -> Vec<String> {
    description
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .map(|l| format!("{}{}", DESCRIPTION_INDENT, l))
        .collect()
}

/// The lines that store `task`: the task line followed by its description.
pub fn render_task(task: &Task, stored_text: &str) -> Vec<String> {
    let mut out = vec![format_task_line(task.status, stored_text)];
    if let Some(desc) = task.description_text() {
        out.extend(indent_description(&desc));
    }
    out
}
