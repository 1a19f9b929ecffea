//! cade core library — map project directories to reminders lists and drive
//! the external `reminders` tool.
//!
//! - [`resolve`] — working directory to list name
//! - [`exec`] — spawn the tool, capture and decode its output
//! - [`parse`] — JSON / plain-text output to [`Task`] and [`ListName`]
//! - [`reminders`] — [`Reminders`] facade operations
//! - [`cache`] — caller-owned [`TaskCache`]
//! - [`config`] — project root and tool location
//! - [`error`] — [`TaskError`]

pub mod cache;
pub mod config;
pub mod error;
pub mod exec;
pub mod parse;
pub mod reminders;
pub mod resolve;
pub mod types;

pub use cache::TaskCache;
pub use config::Config;
pub use error::{CommandFailure, TaskError};
pub use exec::{CommandOutput, CommandResult, Executor, OutputMode};
pub use reminders::{descending_order, Reminders, LIST_NOT_FOUND_MARKER};
pub use types::{ListName, Task, TaskId, TaskList};
