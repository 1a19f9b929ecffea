//! `task lists [--json]`

use anyhow::{Context, Result};
use clap::Args;

use cade_core::Reminders;

use super::{display_table, ListRow};

/// List all Reminders.app lists.
#[derive(Args, Debug)]
pub struct ListsArgs {
    /// Emit the list names as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ListsArgs {
    pub fn run(self, reminders: &Reminders) -> Result<()> {
        let lists = reminders.get_lists().context("failed to enumerate lists")?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&lists).context("failed to render lists JSON")?
            );
            return Ok(());
        }

        let rows: Vec<ListRow> = lists
            .into_iter()
            .enumerate()
            .map(|(index, name)| ListRow { index, name: name.0 })
            .collect();
        display_table(rows)
    }
}
