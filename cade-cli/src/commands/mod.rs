//! Subcommand implementations and the display helpers they share.

pub mod add;
pub mod complete;
pub mod create_list;
pub mod list;
pub mod lists;
pub mod open;

use anyhow::{anyhow, Result};
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use cade_core::{Config, ListName};

/// `--list` if given, else the list the current directory resolves to.
pub fn target_list(config: &Config, flag: Option<String>) -> Result<ListName> {
    if let Some(name) = flag {
        return Ok(ListName::from(name));
    }
    config.list_for_cwd().ok_or_else(|| {
        anyhow!(
            "current directory is not inside a project under {}; pass --list <name>",
            config.project_dir.display()
        )
    })
}

#[derive(Tabled)]
pub struct TaskRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Task")]
    pub title: String,
}

#[derive(Tabled)]
pub struct ListRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "List")]
    pub name: String,
}

/// Render `rows` as a rounded table.
///
/// Empty input is an error so the shell sees a nonzero exit.
pub fn display_table<T: Tabled>(rows: Vec<T>) -> Result<()> {
    if rows.is_empty() {
        return Err(anyhow!("No results found"));
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    Ok(())
}

pub fn display_title(title: &str) {
    println!("{}", title.green().bold());
}
