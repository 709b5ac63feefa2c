use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tasklogapp::model::Destination;

#[derive(Parser, Debug)]
#[command(
    name = "tasklog",
    bin_name = "tasklog",
    version,
    disable_help_subcommand = true,
    about = "Weekly task checklists in plain markdown",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace directory (defaults to $TASKLOG_DIR, then the OS data directory)
    #[arg(long, global = true, help_heading = "Options")]
    pub dir: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the workspace documents (never overwrites)
    #[command(display_order = 1)]
    Init,

    /// Add a task
    #[command(alias = "a", display_order = 2)]
    Add {
        /// Where the task goes: current_week, next_week or backlog
        #[arg(short, long, default_value = "current_week")]
        to: Destination,

        /// Description lines (use \n for several)
        #[arg(short, long)]
        description: Option<String>,

        /// Task text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List tasks
    #[command(alias = "ls", display_order = 3)]
    List {
        /// Only this destination: current_week, next_week or backlog
        destination: Option<Destination>,
    },

    /// Mark a task as completed
    #[command(alias = "done", display_order = 4)]
    Finish {
        /// Mark as closed (won't do) instead of completed
        #[arg(long)]
        close: bool,

        /// Text identifying the task
        #[arg(required = true, num_args = 1..)]
        identifier: Vec<String>,
    },

    /// Mark a finished task as open again
    #[command(display_order = 5)]
    Reopen {
        #[arg(required = true, num_args = 1..)]
        identifier: Vec<String>,
    },

    /// Change a task's text or description
    #[command(alias = "e", display_order = 6)]
    Edit {
        /// New task text
        #[arg(short, long)]
        text: Option<String>,

        /// New description (use \n for several, empty string clears it)
        #[arg(short, long)]
        description: Option<String>,

        #[arg(required = true, num_args = 1..)]
        identifier: Vec<String>,
    },

    /// Move a task to another week or the backlog
    #[command(alias = "mv", display_order = 7)]
    Move {
        /// current_week, next_week or backlog
        destination: Destination,

        #[arg(required = true, num_args = 1..)]
        identifier: Vec<String>,
    },

    /// Archive this week and start the next one
    #[command(display_order = 8)]
    StartWeek,

    /// Answer JSON tool requests, one per line, on stdin/stdout
    #[command(display_order = 20)]
    Serve,

    /// List the tools available to `serve`
    #[command(display_order = 21)]
    Tools,
}

/// Joins the words of a free-text argument.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}

/// Turns each literal `\n` typed on the command line into a line break.
pub fn description_lines(raw: &str) -> String {
    raw.replace("\\n", "\n")
}
