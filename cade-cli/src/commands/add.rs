//! `task add [--list <name>] <words>...`

use anyhow::{bail, Context, Result};
use clap::Args;

use cade_core::{Config, Reminders, Task};

use super::target_list;

/// Add a task to a project.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Task title; words are joined with single spaces.
    pub task: Vec<String>,

    /// Reminders list; defaults to the project of the current directory.
    #[arg(long = "list", short = 'l')]
    pub list: Option<String>,
}

impl AddArgs {
    pub fn run(self, config: &Config, reminders: &Reminders) -> Result<()> {
        let title = self.task.join(" ");
        if title.trim().is_empty() {
            bail!("No task specified, aborting");
        }
        let list = target_list(config, self.list)?;

        let confirmation = reminders
            .add(&Task::new(list.clone(), title))
            .with_context(|| format!("failed to add task to '{list}'"))?;
        println!("{confirmation}");
        Ok(())
    }
}
