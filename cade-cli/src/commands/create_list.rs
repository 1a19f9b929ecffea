//! `task create-list [<name>]`

use anyhow::{Context, Result};
use clap::Args;

use cade_core::{Config, Reminders, TaskList};

use super::target_list;

/// Create a reminders list unless it already exists.
#[derive(Args, Debug)]
pub struct CreateListArgs {
    /// List name; defaults to the project of the current directory.
    pub name: Option<String>,
}

impl CreateListArgs {
    pub fn run(self, config: &Config, reminders: &Reminders) -> Result<()> {
        let list = TaskList::new(target_list(config, self.name)?);

        let created = list
            .create(reminders)
            .with_context(|| format!("failed to create list '{}'", list.name))?;
        if created {
            println!("✓ Created list '{}'", list.name);
        } else {
            println!("List '{}' already exists", list.name);
        }
        Ok(())
    }
}
