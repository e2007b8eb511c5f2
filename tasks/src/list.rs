//! Local, ordered copy of the user's tasks.
//!
//! Successful API calls are folded in as [`TaskChange`]s instead of
//! re-fetching the whole list. The server response is authoritative for every
//! field it returns, so changes always carry the server's copy of a task.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::types::Task;

/// Outcome of a successful task call, ready to apply to a [`TaskList`].
#[derive(Clone, Debug, PartialEq)]
pub enum TaskChange {
    /// A fetch or search result; replaces the whole sequence.
    Replaced(Vec<Task>),
    /// A newly created task; goes to the front.
    Created(Task),
    /// The server's copy after an update; replaces the element in place.
    Updated(Task),
    /// The id of a deleted task.
    Deleted(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskList {
    items: Vec<Task>,
}

impl TaskList {
    pub fn new(items: Vec<Task>) -> Self {
        Self { items }
    }

    /// Fold one change into the list.
    ///
    /// Updates and deletes for ids that are no longer present are ignored, so
    /// a late update cannot resurrect a task that was deleted meanwhile.
    pub fn apply(&mut self, change: TaskChange) {
        match change {
            TaskChange::Replaced(items) => self.items = items,
            TaskChange::Created(task) => self.items.insert(0, task),
            TaskChange::Updated(task) => {
                if let Some(slot) = self.items.iter_mut().find(|t| t.id == task.id) {
                    *slot = task;
                } else {
                    log::debug!("update for unknown task {} ignored", task.id);
                }
            }
            TaskChange::Deleted(id) => self.items.retain(|t| t.id != id),
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.items.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.items
    }

    /// Ids in display order.
    #[cfg(test)]
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|t| t.id.as_str()).collect()
    }

    /// "Showing 1 task" / "Showing N tasks".
    #[must_use]
    pub fn count_label(&self) -> String {
        let noun = if self.items.len() == 1 { "task" } else { "tasks" };
        format!("Showing {} {noun}", self.items.len())
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(items: Vec<Task>) -> Self {
        Self::new(items)
    }
}
