//! # Domain Model
//!
//! Tasklog keeps its whole state in three markdown documents. This module defines the
//! types the rest of the crate uses to talk about them.
//!
//! ## Documents
//!
//! | [`DocId`] | Default file | Sections |
//! |-----------|--------------|----------|
//! | `Current` | `current.md` | `This Week`, `Next Week` |
//! | `Backlog` | `backlog.md` | `Backlog` |
//! | `Archive` | `archive.md` | one `Week of YYYY-MM-DD` per rollover |
//!
//! The text is the persisted state. Nothing here is cached across mutations: every
//! operation reads the document, computes a new one, and writes it back whole.
//!
//! ## Tasks
//!
//! A task is a single line `- [c] text` where `c` is the [`TaskStatus`] character,
//! optionally followed by description lines indented with two spaces:
//!
//! ```text
//! - [ ] Write the release notes
//!   mention the config change
//!   link the migration guide
//! ```
//!
//! ## Backlog Date Suffix
//!
//! Backlog tasks end with ` added on YYYY-MM-DD`. The suffix is parsed into
//! [`Task::date_added`] when reading the backlog and written back only when a task is
//! stored there ([`with_date_suffix`]). Everywhere else the text is handled without it.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+) added on (\d{4}-\d{2}-\d{2})$").expect("date suffix pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    New,
    Completed,
    Closed,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::New
    }
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::New, TaskStatus::Completed, TaskStatus::Closed];

    /// The character written between the checkbox brackets.
    pub fn as_char(self) -> char {
        match self {
            TaskStatus::New => ' ',
            TaskStatus::Completed => 'x',
            TaskStatus::Closed => '-',
        }
    }

    /// Unknown characters are read as `New`.
    pub fn from_char(c: char) -> Self {
        match c {
            'x' => TaskStatus::Completed,
            '-' => TaskStatus::Closed,
            _ => TaskStatus::New,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Closed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::New => "new",
            TaskStatus::Completed => "completed",
            TaskStatus::Closed => "closed",
        };
        f.write_str(s)
    }
}

/// One of the three stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocId {
    Current,
    Backlog,
    Archive,
}

impl DocId {
    pub const ALL: [DocId; 3] = [DocId::Current, DocId::Backlog, DocId::Archive];
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocId::Current => "current",
            DocId::Backlog => "backlog",
            DocId::Archive => "archive",
        };
        f.write_str(s)
    }
}

/// Where a task lives, as seen by the tool layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    CurrentWeek,
    NextWeek,
    Backlog,
}

impl Destination {
    pub fn doc(self) -> DocId {
        match self {
            Destination::CurrentWeek | Destination::NextWeek => DocId::Current,
            Destination::Backlog => DocId::Backlog,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Destination::CurrentWeek => "current_week",
            Destination::NextWeek => "next_week",
            Destination::Backlog => "backlog",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Destination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "current_week" | "current" | "this_week" => Ok(Destination::CurrentWeek),
            "next_week" | "next" => Ok(Destination::NextWeek),
            "backlog" => Ok(Destination::Backlog),
            other => Err(format!(
                "Unknown destination \"{}\" (expected current_week, next_week or backlog)",
                other
            )),
        }
    }
}

/// A titled run of lines, `start_line` being the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub content: Vec<String>,
    /// 0-based, inclusive
    pub start_line: usize,
    /// 0-based, inclusive
    pub end_line: usize,
}

impl Section {
    pub fn matches_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub status: TaskStatus,
    pub text: String,
    pub date_added: Option<NaiveDate>,
    /// Description lines with the two-space indent removed.
    pub description: Vec<String>,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            status: TaskStatus::New,
            text: text.into(),
            date_added: None,
            description: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: Vec<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_date_added(mut self, date: NaiveDate) -> Self {
        self.date_added = Some(date);
        self
    }

    /// Text as it is written to disk, including the backlog suffix if dated.
    pub fn stored_text(&self) -> String {
        match self.date_added {
            Some(date) => with_date_suffix(&self.text, date),
            None => self.text.clone(),
        }
    }

    pub fn description_text(&self) -> Option<String> {
        if self.description.is_empty() {
            None
        } else {
            Some(self.description.join("\n"))
        }
    }
}

/// A located task with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskMatch {
    pub file: DocId,
    pub section: String,
    /// 1-based, absolute within the document.
    pub line: usize,
    /// The task line as it was read, used to revalidate before mutating.
    pub raw_line: String,
    pub task: Task,
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Splits `"<text> added on YYYY-MM-DD"` into its parts.
/// Text without a valid suffix is returned unchanged with no date.
pub fn split_date_suffix(text: &str) -> (String, Option<NaiveDate>) {
    if let Some(caps) = DATE_SUFFIX.captures(text) {
        if let Some(date) = parse_date(&caps[2]) {
            return (caps[1].to_string(), Some(date));
        }
    }
    (text.to_string(), None)
}

pub fn with_date_suffix(text: &str, date: NaiveDate) -> String {
    format!("{} added on {}", text, format_date(date))
}

/// Title of the archive section for the week starting on `monday`.
pub fn archive_key(monday: NaiveDate) -> String {
    format!("Week of {}", format_date(monday))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn status_char_round_trip() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::from_char(status.as_char()), status);
        }
    }

    #[test]
    fn unknown_status_char_is_new() {
        assert_eq!(TaskStatus::from_char('?'), TaskStatus::New);
        assert_eq!(TaskStatus::from_char('X'), TaskStatus::New);
    }

    #[test]
    fn finished_statuses() {
        assert!(!TaskStatus::New.is_finished());
        assert!(TaskStatus::Completed.is_finished());
        assert!(TaskStatus::Closed.is_finished());
    }

    #[test]
    fn splits_backlog_suffix() {
        let (text, added) = split_date_suffix("Buy milk added on 2024-01-15");
        assert_eq!(text, "Buy milk");
        assert_eq!(added, Some(date(2024, 1, 15)));
    }

    #[test]
    fn keeps_text_without_suffix() {
        let (text, added) = split_date_suffix("Buy milk");
        assert_eq!(text, "Buy milk");
        assert_eq!(added, None);
    }

    #[test]
    fn ignores_impossible_dates() {
        let (text, added) = split_date_suffix("Buy milk added on 2024-13-45");
        assert_eq!(text, "Buy milk added on 2024-13-45");
        assert_eq!(added, None);
    }

    #[test]
    fn stored_text_appends_suffix_when_dated() {
        let task = Task::new("Buy milk").with_date_added(date(2024, 2, 1));
        assert_eq!(task.stored_text(), "Buy milk added on 2024-02-01");
        assert_eq!(Task::new("Buy milk").stored_text(), "Buy milk");
    }

    #[test]
    fn archive_key_uses_iso_date() {
        assert_eq!(archive_key(date(2024, 1, 15)), "Week of 2024-01-15");
    }

    #[test]
    fn destination_parsing_accepts_aliases() {
        assert_eq!("current_week".parse::<Destination>(), Ok(Destination::CurrentWeek));
        assert_eq!("next-week".parse::<Destination>(), Ok(Destination::NextWeek));
        assert_eq!("Backlog".parse::<Destination>(), Ok(Destination::Backlog));
        assert!("someday".parse::<Destination>().is_err());
    }

    #[test]
    fn section_title_match_is_case_insensitive() {
        let section = Section {
            title: "This Week".into(),
            content: vec![],
            start_line: 0,
            end_line: 0,
        };
        assert!(section.matches_title("this week"));
        assert!(section.matches_title("  THIS WEEK "));
        assert!(!section.matches_title("Next Week"));
    }
}
