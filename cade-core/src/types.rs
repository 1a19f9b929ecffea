//! Domain types for reminders lists and tasks.
//!
//! Tasks are built transiently from the external tool's output and never
//! persisted here. All types serialize via serde so the CLI can emit JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a reminders list.
///
/// The external tool does not enforce uniqueness; lookups assume it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListName(pub String);

impl ListName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ListName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ListName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Opaque identifier the external tool assigns to a task (`externalId`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One reminder item.
///
/// `id`, `is_complete` and `priority` are only present when the task came
/// from the tool's JSON output. `index` is the display position the tool
/// uses to address the task for mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    pub title: String,
    pub parent: ListName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl Task {
    /// A new, not yet submitted task for `parent`.
    pub fn new(parent: impl Into<ListName>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            parent: parent.into(),
            id: None,
            is_complete: None,
            priority: None,
            index: None,
        }
    }

    /// Same task, addressed at display position `index`.
    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// A named collection of tasks in the external tool's namespace.
///
/// Existence is never tracked locally; see [`crate::Reminders::list_exists`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskList {
    pub name: ListName,
}

impl TaskList {
    pub fn new(name: impl Into<ListName>) -> Self {
        Self { name: name.into() }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(ListName::from("work").to_string(), "work");
        assert_eq!(TaskId::from("CC7A").to_string(), "CC7A");
    }

    #[test]
    fn new_task_has_no_json_only_fields() {
        let task = Task::new("work", "write report");
        assert_eq!(task.parent, ListName::from("work"));
        assert!(task.id.is_none());
        assert!(task.is_complete.is_none());
        assert!(task.priority.is_none());
        assert!(task.index.is_none());
        assert_eq!(task.at_index(4).index, Some(4));
    }

    #[test]
    fn task_serializes_without_absent_fields() {
        let json = serde_json::to_value(Task::new("home", "water plants")).expect("serialize");
        let object = json.as_object().expect("object");
        assert_eq!(object.len(), 2);
        assert_eq!(object["parent"], "home");
    }
}
