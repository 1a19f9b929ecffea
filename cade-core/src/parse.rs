//! Turn the reminders tool's output into [`Task`]s and [`ListName`]s.
//!
//! JSON task objects have their keys renamed through [`FIELD_RENAMES`]
//! before construction. Any key that is not a [`Task`] attribute after
//! renaming is rejected. `index` is never taken from the tool: it is the
//! display position, assigned by the enumerations.

use serde_json::{Map, Value};

use crate::error::TaskError;
use crate::types::{ListName, Task};

/// External key to task attribute.
pub const FIELD_RENAMES: &[(&str, &str)] = &[
    ("externalId", "id"),
    ("isCompleted", "is_complete"),
    ("list", "parent"),
];

/// Every attribute a task object may carry once renamed.
pub const TASK_FIELDS: &[&str] = &["title", "parent", "id", "is_complete", "priority"];

fn rename_field(key: &str) -> &str {
    FIELD_RENAMES
        .iter()
        .find(|(external, _)| *external == key)
        .map(|(_, attribute)| *attribute)
        .unwrap_or(key)
}

/// Build a task from one JSON object of `show --format json` output.
pub fn task_from_object(object: Map<String, Value>) -> Result<Task, TaskError> {
    let mut renamed = Map::with_capacity(object.len());
    for (key, value) in object {
        let attribute = rename_field(&key);
        if !TASK_FIELDS.contains(&attribute) {
            return Err(TaskError::UnknownField { field: key });
        }
        renamed.insert(attribute.to_owned(), value);
    }
    serde_json::from_value(Value::Object(renamed))
        .map_err(|e| TaskError::UnexpectedOutput(format!("malformed task object: {e}")))
}

/// Build a task from a JSON value, which must be an object.
pub fn task_from_value(value: Value) -> Result<Task, TaskError> {
    match value {
        Value::Object(object) => task_from_object(object),
        other => Err(TaskError::UnexpectedOutput(format!(
            "expected a task object, got {other}"
        ))),
    }
}

/// Tasks from a JSON array, each tagged with its display position.
pub fn tasks_from_json(value: Value) -> Result<Vec<Task>, TaskError> {
    expect_array(value, "task")?
        .into_iter()
        .enumerate()
        .map(|(index, item)| task_from_value(item).map(|task| task.at_index(index)))
        .collect()
}

/// List names from `show-lists --format json`: an array of strings.
pub fn list_names_from_json(value: Value) -> Result<Vec<ListName>, TaskError> {
    expect_array(value, "list name")?
        .into_iter()
        .map(|item| match item {
            Value::String(name) => Ok(ListName::from(name)),
            other => Err(TaskError::UnexpectedOutput(format!(
                "expected a list name string, got {other}"
            ))),
        })
        .collect()
}

/// Title of one plain-text `show` line: the leading index run
/// (digits, whitespace, optional colon) is dropped.
pub fn title_from_plain_line(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit() || c.is_whitespace());
    rest.strip_prefix(':').unwrap_or(rest).trim()
}

/// Tasks from plain-text `show` output. Blank lines are skipped; positions
/// follow display order, which the tool does not promise to keep stable.
pub fn tasks_from_lines(lines: &[String], parent: &ListName) -> Vec<Task> {
    lines
        .iter()
        .map(|line| title_from_plain_line(line))
        .filter(|title| !title.is_empty())
        .enumerate()
        .map(|(index, title)| Task::new(parent.clone(), title).at_index(index))
        .collect()
}

fn expect_array(value: Value, what: &str) -> Result<Vec<Value>, TaskError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(TaskError::UnexpectedOutput(format!(
            "expected an array of {what}s, got {other}"
        ))),
    }
}
