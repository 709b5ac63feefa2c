//! # CLI Behavior
//!
//! One possible client for tasklog. The CLI is the only place that knows about
//! terminal I/O, exit codes and output formatting.
//!
//! Running `tasklog` with no subcommand lists the tasks.
//!
//! Identifiers are free text: `tasklog finish write tests` joins the words and
//! finishes the one task whose text contains "write tests". Zero or several matches
//! fail with the candidates listed.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: context setup, logging, dispatch
//! - `render`: output formatting
//! - `styles`: terminal styles
//! - `serve`: the JSON tool server on stdin/stdout

mod commands;
mod render;
mod serve;
pub mod setup;
mod styles;

pub use commands::run;
