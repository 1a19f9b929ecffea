//! Facade over the reminders tool.
//!
//! # Sub-commands issued
//!
//! ```text
//! reminders show-lists --format json
//! reminders show <list> [--format json]
//! reminders add <list> <title>
//! reminders complete <list> <index>
//! reminders new-list <list>
//! ```
//!
//! The tool addresses tasks by display position, not by `externalId`.
//! Completing several tasks therefore goes highest index first so earlier
//! completions never shift the positions still to be processed. A concurrent
//! writer can still shift them; the tool has no stable-position API.

use crate::cache::TaskCache;
use crate::config::Config;
use crate::error::TaskError;
use crate::exec::{run_command, CommandResult, Executor, OutputMode};
use crate::parse;
use crate::types::{ListName, Task, TaskList};

/// Substring of the tool's diagnostics when a list does not exist.
pub const LIST_NOT_FOUND_MARKER: &str = "No reminders list matching";

/// Command that brings Reminders.app to the foreground.
pub const OPEN_APP_COMMAND: [&str; 2] = ["/usr/bin/open", "/System/Applications/Reminders.app/"];

/// Typed operations over the external reminders tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminders {
    executor: Executor,
}

impl Reminders {
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            executor: Executor::new(tool),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tool.clone())
    }

    /// All list names, in the tool's order.
    pub fn get_lists(&self) -> Result<Vec<ListName>, TaskError> {
        let result = self.executor.run(&["show-lists"], OutputMode::Structured)?;
        parse::list_names_from_json(result.output.into_json()?)
    }

    /// Tasks of `list` from the tool's JSON output.
    pub fn get_tasks(&self, list: &ListName) -> Result<Vec<Task>, TaskError> {
        let result = self
            .executor
            .run(&["show", list.as_str()], OutputMode::Structured)
            .map_err(|e| classify(list, e))?;
        parse::tasks_from_json(result.output.into_json()?)
    }

    /// Tasks of `list` from the tool's plain-text output. Only titles are known.
    pub fn get_tasks_plain(&self, list: &ListName) -> Result<Vec<Task>, TaskError> {
        let result = self
            .executor
            .run(&["show", list.as_str()], OutputMode::Raw)
            .map_err(|e| classify(list, e))?;
        Ok(parse::tasks_from_lines(&result.output.into_lines(), list))
    }

    /// `false` only when the tool reports the list missing; an empty list exists.
    pub fn list_exists(&self, list: &ListName) -> Result<bool, TaskError> {
        match self.get_tasks(list) {
            Ok(_) => Ok(true),
            Err(TaskError::ListNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Create `list` unless it exists. Returns whether it was created.
    pub fn create_list(&self, list: &ListName) -> Result<bool, TaskError> {
        if self.list_exists(list)? {
            tracing::debug!(list = %list, "list already exists");
            return Ok(false);
        }
        self.executor.run(&["new-list", list.as_str()], OutputMode::Raw)?;
        tracing::info!(list = %list, "created list");
        Ok(true)
    }

    /// Add `task` to its parent list; returns the tool's confirmation line.
    pub fn add(&self, task: &Task) -> Result<String, TaskError> {
        let result = self.executor.run(
            &["add", task.parent.as_str(), task.title.as_str()],
            OutputMode::Raw,
        )?;
        Ok(result.output.first_line())
    }

    /// Complete `task` at its display index.
    pub fn complete(&self, task: &Task) -> Result<String, TaskError> {
        let index = task.index.ok_or_else(|| TaskError::MissingIndex {
            title: task.title.clone(),
        })?;
        self.complete_index(&task.parent, index)
    }

    /// Complete the task shown at `index` in `list`.
    pub fn complete_index(&self, list: &ListName, index: usize) -> Result<String, TaskError> {
        let index = index.to_string();
        let result = self
            .executor
            .run(&["complete", list.as_str(), index.as_str()], OutputMode::Raw)?;
        Ok(result.output.first_line())
    }

    /// Complete several display positions, highest first. Stops at the first
    /// failure; returns the confirmation lines in the order issued.
    pub fn complete_many(
        &self,
        list: &ListName,
        indices: &[usize],
    ) -> Result<Vec<String>, TaskError> {
        descending_order(indices)
            .into_iter()
            .map(|index| self.complete_index(list, index))
            .collect()
    }
}

/// `indices` deduplicated and sorted highest first.
pub fn descending_order(indices: &[usize]) -> Vec<usize> {
    let mut ordered = indices.to_vec();
    ordered.sort_unstable_by(|a, b| b.cmp(a));
    ordered.dedup();
    ordered
}

/// Bring Reminders.app forward. Runs without injecting the tool.
pub fn open_app() -> Result<CommandResult, TaskError> {
    let argv: Vec<String> = OPEN_APP_COMMAND.iter().map(|s| (*s).to_owned()).collect();
    run_command(&argv, OutputMode::Raw)
}

/// Promote a command failure whose output carries the marker to
/// [`TaskError::ListNotFound`].
fn classify(list: &ListName, err: TaskError) -> TaskError {
    match err {
        TaskError::Command(failure) if failure.output.contains(LIST_NOT_FOUND_MARKER) => {
            tracing::warn!(list = %list, "reminders list not found");
            TaskError::ListNotFound {
                name: list.clone(),
                source: failure,
            }
        }
        other => other,
    }
}

// ---------------------------------------------------------------------------
// List entity helpers
// ---------------------------------------------------------------------------

impl TaskList {
    pub fn exists(&self, reminders: &Reminders) -> Result<bool, TaskError> {
        reminders.list_exists(&self.name)
    }

    pub fn create(&self, reminders: &Reminders) -> Result<bool, TaskError> {
        reminders.create_list(&self.name)
    }

    /// Tasks of this list, served from `cache` once fetched.
    pub fn tasks<'c>(
        &self,
        reminders: &Reminders,
        cache: &'c mut TaskCache,
    ) -> Result<&'c [Task], TaskError> {
        cache.get_or_fetch(reminders, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandFailure;

    fn failure(output: &str) -> TaskError {
        TaskError::Command(CommandFailure {
            return_code: 1,
            command: "reminders show ghost --format json".to_string(),
            output: output.to_string(),
            stdout: String::new(),
            stderr: output.to_string(),
        })
    }

    #[test]
    fn descending_order_prevents_index_shift() {
        assert_eq!(descending_order(&[2, 0, 3]), vec![3, 2, 0]);
        assert_eq!(descending_order(&[1, 1, 0]), vec![1, 0]);
        assert!(descending_order(&[]).is_empty());
    }

    #[test]
    fn marker_promotes_to_list_not_found() {
        let list = ListName::from("ghost");
        let err = classify(&list, failure("No reminders list matching ghost"));
        assert!(
            matches!(err, TaskError::ListNotFound { ref name, .. } if *name == list),
            "got: {err}"
        );
    }

    #[test]
    fn other_failures_stay_generic() {
        let err = classify(&ListName::from("ghost"), failure("permission denied"));
        assert!(matches!(err, TaskError::Command(_)), "got: {err}");

        let err = classify(
            &ListName::from("ghost"),
            TaskError::ToolNotFound {
                name: "reminders".to_string(),
            },
        );
        assert!(matches!(err, TaskError::ToolNotFound { .. }));
    }

    #[test]
    fn completing_task_without_index_fails() {
        let reminders = Reminders::new("/nonexistent/reminders");
        let err = reminders.complete(&Task::new("work", "no index")).unwrap_err();
        assert!(matches!(err, TaskError::MissingIndex { .. }), "got: {err}");
    }
}
