//! # Tool Registry
//!
//! The request/response surface used by agents. The set of tools is closed and known at
//! compile time: [`ToolName`] lists them, [`ToolCall`] carries their arguments, and
//! [`dispatch`] is one exhaustive `match`.
//!
//! Requests are JSON objects, one per call:
//!
//! ```text
//! {"tool": "add_task", "arguments": {"text": "Ship 0.3", "destination": "next_week"}}
//! {"tool": "start_week"}
//! ```
//!
//! Every outcome, including malformed requests and failed operations, becomes a
//! [`ToolResponse`]. Nothing here panics on bad input.

use crate::api::TasklogApi;
use crate::checkpoint::Checkpoint;
use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::error::{Result, TasklogError};
use crate::model::{format_date, Destination, TaskMatch, TaskStatus};
use crate::store::DocumentStore;
use crate::task_line::checkbox;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    AddTask,
    FinishTask,
    EditTask,
    MoveTask,
    GetTasks,
    StartWeek,
}

impl ToolName {
    pub const ALL: [ToolName; 6] = [
        ToolName::AddTask,
        ToolName::FinishTask,
        ToolName::EditTask,
        ToolName::MoveTask,
        ToolName::GetTasks,
        ToolName::StartWeek,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolName::AddTask => "add_task",
            ToolName::FinishTask => "finish_task",
            ToolName::EditTask => "edit_task",
            ToolName::MoveTask => "move_task",
            ToolName::GetTasks => "get_tasks",
            ToolName::StartWeek => "start_week",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolName::AddTask => {
                "Add a task to current_week, next_week or backlog, with an optional description"
            }
            ToolName::FinishTask => "Mark the task matching an identifier as completed or closed",
            ToolName::EditTask => "Change the text and/or description of the task matching an identifier",
            ToolName::MoveTask => "Move the task matching an identifier to current_week, next_week or backlog",
            ToolName::GetTasks => "List tasks with their section and line, optionally for one destination",
            ToolName::StartWeek => "Archive this week, carry over unfinished tasks and promote next week",
        }
    }
}

fn default_destination() -> Destination {
    Destination::CurrentWeek
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinishStatus {
    #[default]
    Completed,
    Closed,
}

impl From<FinishStatus> for TaskStatus {
    fn from(status: FinishStatus) -> Self {
        match status {
            FinishStatus::Completed => TaskStatus::Completed,
            FinishStatus::Closed => TaskStatus::Closed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "tool", content = "arguments", rename_all = "snake_case")]
pub enum ToolCall {
    AddTask {
        text: String,
        #[serde(default = "default_destination")]
        destination: Destination,
        #[serde(default)]
        description: Option<String>,
    },
    FinishTask {
        identifier: String,
        #[serde(default)]
        status: FinishStatus,
    },
    EditTask {
        identifier: String,
        #[serde(default, alias = "text")]
        new_text: Option<String>,
        #[serde(default, alias = "description")]
        new_description: Option<String>,
    },
    MoveTask {
        identifier: String,
        destination: Destination,
    },
    GetTasks {
        #[serde(default)]
        destination: Option<Destination>,
    },
    StartWeek {},
}

impl ToolCall {
    pub fn name(&self) -> ToolName {
        match self {
            ToolCall::AddTask { .. } => ToolName::AddTask,
            ToolCall::FinishTask { .. } => ToolName::FinishTask,
            ToolCall::EditTask { .. } => ToolName::EditTask,
            ToolCall::MoveTask { .. } => ToolName::MoveTask,
            ToolCall::GetTasks { .. } => ToolName::GetTasks,
            ToolCall::StartWeek {} => ToolName::StartWeek,
        }
    }
}

/// Parses one JSON request. A missing or null `arguments` is read as `{}`.
pub fn parse_call(request: &str) -> Result<ToolCall> {
    let mut value: Value = serde_json::from_str(request)?;
    let Some(object) = value.as_object_mut() else {
        return Err(TasklogError::Api(
            "Request must be a JSON object with a \"tool\" field".to_string(),
        ));
    };
    if object.get("arguments").map_or(true, Value::is_null) {
        object.insert("arguments".to_string(), Value::Object(Default::default()));
    }
    Ok(serde_json::from_value(value)?)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResponse {
    pub ok: bool,
    pub text: String,
}

impl ToolResponse {
    pub fn from_result(result: Result<CmdResult>) -> Self {
        match result {
            Ok(result) => Self {
                ok: true,
                text: render_text(&result),
            },
            Err(e) => Self {
                ok: false,
                text: e.to_string(),
            },
        }
    }
}

pub fn dispatch<S, C, K>(api: &mut TasklogApi<S, C, K>, call: ToolCall) -> ToolResponse
where
    S: DocumentStore,
    C: Checkpoint,
    K: Clock,
{
    let result = match call {
        ToolCall::AddTask {
            text,
            destination,
            description,
        } => api.add_task(&text, destination, description.as_deref()),
        ToolCall::FinishTask { identifier, status } => {
            api.finish_task(&identifier, status.into())
        }
        ToolCall::EditTask {
            identifier,
            new_text,
            new_description,
        } => api.edit_task(&identifier, new_text.as_deref(), new_description.as_deref()),
        ToolCall::MoveTask {
            identifier,
            destination,
        } => api.move_task(&identifier, destination),
        ToolCall::GetTasks { destination } => api.get_tasks(destination),
        ToolCall::StartWeek {} => api.start_week(),
    };
    ToolResponse::from_result(result)
}

/// Parses and dispatches one request line.
pub fn handle_request<S, C, K>(api: &mut TasklogApi<S, C, K>, request: &str) -> ToolResponse
where
    S: DocumentStore,
    C: Checkpoint,
    K: Clock,
{
    match parse_call(request) {
        Ok(call) => dispatch(api, call),
        Err(e) => ToolResponse {
            ok: false,
            text: format!("Invalid request: {}", e),
        },
    }
}

/// Plain-text rendering of a command result for tool responses.
pub fn render_text(result: &CmdResult) -> String {
    let mut lines: Vec<String> = result.messages.iter().map(|m| m.content.clone()).collect();

    if let Some(section) = &result.section {
        lines.push(format!("# {}", section.title));
        lines.extend(section.content.iter().cloned());
    }

    for m in &result.listed_tasks {
        lines.push(describe(m));
        lines.extend(m.task.description.iter().map(|d| format!("    {}", d)));
    }

    if result.listed_tasks.is_empty() && lines.is_empty() {
        lines.push("No tasks".to_string());
    }
    lines.join("\n")
}

fn describe(m: &TaskMatch) -> String {
    let mut line = format!(
        "{} {} ({}, {}:{})",
        checkbox(m.task.status),
        m.task.text,
        m.section,
        m.file,
        m.line
    );
    if let Some(date) = m.task.date_added {
        line.push_str(&format!(" added {}", format_date(date)));
    }
    line
}
