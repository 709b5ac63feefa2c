//! # Tasklog
//!
//! Weekly task checklists kept as plain markdown, with a rollover that archives each
//! week. This crate is the UI-agnostic core; the `tasklog` binary is a thin client.
//!
//! ## Layers
//!
//! ```text
//! CLI / tool server
//!        │
//!   api::TasklogApi        facade, input normalization
//!        │
//!   commands/*.rs          one module per operation, returns CmdResult
//!        │
//!   locate · edit · rollover     pure text transformations
//!        │
//!   document · task_line · model
//! ```
//!
//! The pure layers never touch the filesystem and never log. Side effects go through
//! three traits injected via [`workspace::Workspace`]:
//!
//! - [`store::DocumentStore`]: whole-document read and write
//! - [`checkpoint::Checkpoint`]: version-control snapshots
//! - [`clock::Clock`]: today's date and the Monday of this week
//!
//! ## Documents
//!
//! ```text
//! current.md              backlog.md                         archive.md
//! # This Week             # Backlog                          # Week of 2024-01-15
//! - [ ] Ship 0.3          - [ ] Learn Go added on 2024-01-02 - [x] Ship 0.2
//!   changelog in PR
//!
//! # Next Week
//! - [ ] Plan Q2
//! ```

pub mod api;
pub mod checkpoint;
pub mod clock;
pub mod commands;
pub mod config;
pub mod document;
pub mod edit;
pub mod error;
pub mod init;
pub mod locate;
pub mod model;
pub mod rollover;
pub mod store;
pub mod task_line;
pub mod tools;
pub mod workspace;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use api::TasklogApi;
pub use error::{Result, TasklogError};
pub use model::{DocId, Destination, Task, TaskMatch, TaskStatus};
