//! `task list [--list <name>] [--json]`

use anyhow::{anyhow, Context, Result};
use clap::Args;

use cade_core::{Config, Reminders, TaskError};

use super::{display_table, display_title, target_list, TaskRow};

/// List tasks for a project.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Reminders list; defaults to the project of the current directory.
    #[arg(long = "list", short = 'l')]
    pub list: Option<String>,

    /// Emit the tasks as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn run(self, config: &Config, reminders: &Reminders) -> Result<()> {
        let list = target_list(config, self.list)?;

        let tasks = match reminders.get_tasks(&list) {
            Ok(tasks) => tasks,
            Err(TaskError::ListNotFound { name, .. }) => {
                return Err(anyhow!(
                    "List '{name}' not found; pass --list <name> or run `task create-list {name}`"
                ))
            }
            Err(err) => return Err(err).with_context(|| format!("failed to show '{list}'")),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&tasks).context("failed to render tasks JSON")?
            );
            return Ok(());
        }

        display_title(list.as_str());
        let rows: Vec<TaskRow> = tasks
            .into_iter()
            .enumerate()
            .map(|(position, task)| TaskRow {
                index: task.index.unwrap_or(position),
                title: task.title,
            })
            .collect();
        display_table(rows)
    }
}
