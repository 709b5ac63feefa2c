use crate::model::DocId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TasklogError {
    #[error("Section \"{0}\" not found")]
    SectionNotFound(String),

    #[error("Line {line} not found (document has {len} lines)")]
    LineNotFound { line: usize, len: usize },

    #[error("Line {0} is not a task")]
    NotATask(usize),

    #[error("Task identifier cannot be empty")]
    EmptyIdentifier,

    #[error("{}", render_no_match(.identifier, .suggestions))]
    NoMatch {
        identifier: String,
        suggestions: Vec<String>,
    },

    #[error("{}", render_ambiguous(.identifier, .matches))]
    AmbiguousMatch {
        identifier: String,
        /// `(task text, section title)` for every candidate
        matches: Vec<(String, String)>,
    },

    #[error("Could not find required sections \"{active}\" and \"{queued}\" in the current document")]
    MissingSections { active: String, queued: String },

    #[error("Line {line} changed since it was located (expected \"{expected}\")")]
    StaleMatch { line: usize, expected: String },

    #[error("Document not found: {0}")]
    DocumentNotFound(DocId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<TasklogError>,
    },
}

impl TasklogError {
    /// Prefixes the error with an operation-specific message.
    pub fn context(self, context: impl Into<String>) -> Self {
        TasklogError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Unwraps any `Context` layers.
    pub fn root(&self) -> &TasklogError {
        match self {
            TasklogError::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, TasklogError>;

/// Extension for attaching an operation prefix to fallible calls.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(context))
    }
}

fn render_no_match(identifier: &str, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return format!(
            "No task found matching \"{}\": there are no tasks yet",
            identifier
        );
    }
    let quoted: Vec<String> = suggestions.iter().map(|s| format!("\"{}\"", s)).collect();
    format!(
        "No task found matching \"{}\". Did you mean: {}?",
        identifier,
        quoted.join(", ")
    )
}

fn render_ambiguous(identifier: &str, matches: &[(String, String)]) -> String {
    let mut out = format!(
        "\"{}\" matches {} tasks, please be more specific:",
        identifier,
        matches.len()
    );
    for (text, section) in matches {
        out.push_str(&format!("\n  - {} ({})", text, section));
    }
    out
}
