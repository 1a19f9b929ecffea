//! `task complete [--list <name>] <index>...`

use anyhow::{Context, Result};
use clap::Args;

use cade_core::{Config, Reminders};

use super::target_list;

/// Complete task(s) for a project.
#[derive(Args, Debug)]
pub struct CompleteArgs {
    /// Display indices as shown by `task list`.
    #[arg(required = true, value_name = "INDEX")]
    pub tasks: Vec<usize>,

    /// Reminders list; defaults to the project of the current directory.
    #[arg(long = "list", short = 'l')]
    pub list: Option<String>,
}

impl CompleteArgs {
    pub fn run(self, config: &Config, reminders: &Reminders) -> Result<()> {
        let list = target_list(config, self.list)?;

        // Highest index first, so earlier completions don't renumber the rest.
        for index in cade_core::descending_order(&self.tasks) {
            let confirmation = reminders
                .complete_index(&list, index)
                .with_context(|| format!("failed to complete task {index} in '{list}'"))?;
            println!("{confirmation}");
        }
        Ok(())
    }
}
