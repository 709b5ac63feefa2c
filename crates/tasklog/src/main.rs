//! # Tasklog CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, and this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │  CLI (crates/tasklog/src/cli/)                     │
//! │  - clap argument parsing (setup.rs)                │
//! │  - context wiring and dispatch (commands.rs)       │
//! │  - terminal rendering (render.rs, styles.rs)       │
//! │  - line-delimited JSON tool server (serve.rs)      │
//! └────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌────────────────────────────────────────────────────┐
//! │  tasklogapp::api::TasklogApi                       │
//! │  - dispatches to commands, returns CmdResult       │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from the API inward is UI agnostic. The CLI owns argument parsing,
//! logging setup, rendering, and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
