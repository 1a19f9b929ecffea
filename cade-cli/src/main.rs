//! task — project-aware front end for the `reminders` CLI.
//!
//! # Usage
//!
//! ```text
//! task list [--list <name>] [--json]
//! task lists [--json]
//! task add [--list <name>] <words>...
//! task complete [--list <name>] <index>...
//! task create-list [<name>]
//! task open
//! ```
//!
//! Without `--list`, the list is the first directory below the project root
//! (`--project-dir`, `$CADE_PROJECT_DIR`, or `~/code`) on the way to the
//! current directory.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cade_core::{Config, Reminders};
use commands::{
    add::AddArgs, complete::CompleteArgs, create_list::CreateListArgs, list::ListArgs,
    lists::ListsArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "task",
    version,
    about = "Manage Reminders.app lists for the project you are working in",
    long_about = None,
)]
struct Cli {
    /// Root directory whose immediate children name reminders lists.
    #[arg(long, global = true, value_name = "PATH")]
    project_dir: Option<PathBuf>,

    /// Log each external invocation to stderr.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List tasks for a project.
    List(ListArgs),

    /// List all Reminders.app lists.
    Lists(ListsArgs),

    /// Add a task to a project.
    Add(AddArgs),

    /// Complete task(s) for a project by index.
    Complete(CompleteArgs),

    /// Create the project's list unless it already exists.
    CreateList(CreateListArgs),

    /// Open Reminders.app or move it to the foreground.
    Open,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.project_dir).context("failed to load configuration")?;
    tracing::debug!(project_dir = %config.project_dir.display(), tool = %config.tool, "configuration");
    let reminders = Reminders::from_config(&config);

    match cli.command {
        Commands::List(args) => args.run(&config, &reminders),
        Commands::Lists(args) => args.run(&reminders),
        Commands::Add(args) => args.run(&config, &reminders),
        Commands::Complete(args) => args.run(&config, &reminders),
        Commands::CreateList(args) => args.run(&config, &reminders),
        Commands::Open => commands::open::run(),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
