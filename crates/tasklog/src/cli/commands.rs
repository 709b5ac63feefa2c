//! # CLI Layer
//!
//! The only place that knows about stdout, stderr and process exits:
//!
//! 1. **Argument Parsing**: clap, see `setup.rs`
//! 2. **Logging**: a `tracing-subscriber` on stderr, `warn` by default, `debug` with
//!    `-v`, `RUST_LOG` wins over both
//! 3. **Context Setup**: [`initialize`] resolves the workspace and builds the API
//! 4. **Dispatch**: one API call per subcommand
//! 5. **Output**: rendered with `render.rs`

use super::render::{render_messages, render_section, render_task_list, render_tools};
use super::serve::serve;
use super::setup::{description_lines, join_words, Cli, Commands};
use anyhow::Result;
use clap::Parser;
use std::io;
use tasklogapp::commands::CmdResult;
use tasklogapp::init::initialize;
use tasklogapp::model::TaskStatus;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::List { destination: None });

    if let Commands::Tools = command {
        print!("{}", render_tools());
        return Ok(());
    }

    let creating = matches!(command, Commands::Init);
    let mut ctx = initialize(cli.dir, creating)?;
    let api = &mut ctx.api;

    let result = match command {
        Commands::Init => {
            let result = api.init()?;
            print_result(&result);
            println!("Workspace ready at {}", ctx.root.display());
            return Ok(());
        }
        Commands::Add {
            to,
            description,
            text,
        } => {
            let description = description.as_deref().map(description_lines);
            api.add_task(&join_words(&text), to, description.as_deref())?
        }
        Commands::List { destination } => api.get_tasks(destination)?,
        Commands::Finish { close, identifier } => {
            let status = if close {
                TaskStatus::Closed
            } else {
                TaskStatus::Completed
            };
            api.finish_task(&join_words(&identifier), status)?
        }
        Commands::Reopen { identifier } => {
            api.finish_task(&join_words(&identifier), TaskStatus::New)?
        }
        Commands::Edit {
            text,
            description,
            identifier,
        } => {
            let description = description.as_deref().map(description_lines);
            api.edit_task(
                &join_words(&identifier),
                text.as_deref(),
                description.as_deref(),
            )?
        }
        Commands::Move {
            destination,
            identifier,
        } => api.move_task(&join_words(&identifier), destination)?,
        Commands::StartWeek => api.start_week()?,
        Commands::Serve => {
            let stdin = io::stdin();
            return serve(api, stdin.lock(), io::stdout().lock());
        }
        Commands::Tools => {
            print!("{}", render_tools());
            return Ok(());
        }
    };

    print_result(&result);
    Ok(())
}

fn print_result(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
    if let Some(section) = &result.section {
        print!("{}", render_section(section));
    }
    let nothing_else = result.messages.is_empty() && result.section.is_none();
    if !result.listed_tasks.is_empty() || nothing_else {
        print!("{}", render_task_list(&result.listed_tasks));
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // a subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
