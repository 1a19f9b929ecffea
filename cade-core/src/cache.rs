//! Caller-owned memo of fetched task sets.
//!
//! Entries live until the caller drops them with [`TaskCache::invalidate`] or
//! [`TaskCache::clear`]. Changes made by another process are never observed
//! through a cached entry.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::TaskError;
use crate::reminders::Reminders;
use crate::types::{ListName, Task};

#[derive(Debug, Clone, Default)]
pub struct TaskCache {
    entries: HashMap<ListName, Vec<Task>>,
}

impl TaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached tasks for `list`, fetching them on a miss.
    ///
    /// A failed fetch caches nothing.
    pub fn get_or_fetch(
        &mut self,
        reminders: &Reminders,
        list: &ListName,
    ) -> Result<&[Task], TaskError> {
        match self.entries.entry(list.clone()) {
            Entry::Occupied(entry) => Ok(entry.into_mut().as_slice()),
            Entry::Vacant(entry) => {
                let tasks = reminders.get_tasks(list)?;
                tracing::debug!(list = %list, count = tasks.len(), "cached tasks");
                Ok(entry.insert(tasks).as_slice())
            }
        }
    }

    pub fn get(&self, list: &ListName) -> Option<&[Task]> {
        self.entries.get(list).map(Vec::as_slice)
    }

    /// Store `tasks` for `list`, replacing any cached set.
    pub fn insert(&mut self, list: ListName, tasks: Vec<Task>) {
        self.entries.insert(list, tasks);
    }

    /// Drop the cached set for `list`. Returns whether one was present.
    pub fn invalidate(&mut self, list: &ListName) -> bool {
        self.entries.remove(list).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work() -> ListName {
        ListName::from("work")
    }

    #[test]
    fn cached_entry_is_served_without_fetching() {
        let mut cache = TaskCache::new();
        cache.insert(work(), vec![Task::new("work", "cached").at_index(0)]);

        // The tool path does not exist, so a fetch would fail.
        let reminders = Reminders::new("/nonexistent/reminders");
        let tasks = cache.get_or_fetch(&reminders, &work()).expect("cached");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "cached");
    }

    #[test]
    fn invalidate_drops_only_that_list() {
        let mut cache = TaskCache::new();
        cache.insert(work(), vec![]);
        cache.insert(ListName::from("home"), vec![]);

        assert_eq!(cache.len(), 2);
        assert!(cache.invalidate(&work()));
        assert!(!cache.invalidate(&work()));
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&work()).is_none());
        assert!(cache.get(&ListName::from("home")).is_some());

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn failed_fetch_caches_nothing() {
        let mut cache = TaskCache::new();
        let reminders = Reminders::new("/nonexistent/reminders");
        let err = cache.get_or_fetch(&reminders, &work()).unwrap_err();
        assert!(matches!(err, TaskError::ToolNotFound { .. }));
        assert!(cache.is_empty());
    }
}
