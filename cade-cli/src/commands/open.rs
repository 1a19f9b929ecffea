//! `task open`

use anyhow::{Context, Result};

pub fn run() -> Result<()> {
    cade_core::reminders::open_app().context("failed to open Reminders.app")?;
    Ok(())
}
