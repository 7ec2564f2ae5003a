//! Task list model.
//!
//! Tasks have no identity beyond their position. Positions handed in and
//! out of this module are 1-based; removing a task shifts every later task
//! down by one.
//!
//! # Example
//!
//! ```
//! use tasklist::task::TaskList;
//!
//! let mut tasks = TaskList::new();
//! tasks.add("buy milk").unwrap();
//! tasks.add("walk dog").unwrap();
//! tasks.remove(1).unwrap();
//! assert_eq!(tasks.get(1).unwrap().as_str(), "walk dog");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TaskError};

/// A single task: trimmed, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Task(String);

impl Task {
    /// Build a task from raw input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Validation`] if nothing is left after trimming.
    pub fn new(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TaskError::Validation);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Task {
    type Error = TaskError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Task> for String {
    fn from(task: Task) -> Self {
        task.0
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, mutable sequence of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task and return its 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Validation`] if `text` trims to empty. The list
    /// is left unchanged.
    pub fn add(&mut self, text: &str) -> Result<usize> {
        let task = Task::new(text)?;
        self.tasks.push(task);
        debug!(position = self.tasks.len(), "Task added");
        Ok(self.tasks.len())
    }

    /// Task at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::OutOfRange`] if `position` is not in `[1, len]`.
    pub fn get(&self, position: usize) -> Result<&Task> {
        let index = self.index_of(position)?;
        Ok(&self.tasks[index])
    }

    /// Replace the task at `position`, returning the previous task.
    ///
    /// The position is checked before the text, so an out-of-range position
    /// with empty text reports [`TaskError::OutOfRange`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::OutOfRange`] or [`TaskError::Validation`]; in
    /// both cases the list is left unchanged.
    pub fn update(&mut self, position: usize, text: &str) -> Result<Task> {
        let index = self.index_of(position)?;
        let task = Task::new(text)?;
        debug!(position, "Task updated");
        Ok(std::mem::replace(&mut self.tasks[index], task))
    }

    /// Remove the task at `position`, shifting later tasks down by one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::OutOfRange`] if `position` is not in `[1, len]`.
    pub fn remove(&mut self, position: usize) -> Result<Task> {
        let index = self.index_of(position)?;
        debug!(position, "Task removed");
        Ok(self.tasks.remove(index))
    }

    /// Tasks paired with their current 1-based positions.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks.iter().enumerate().map(|(i, task)| (i + 1, task))
    }

    /// Listing lines in the form `"<position>: <task>"`.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.iter()
            .map(|(position, task)| format!("{position}: {task}"))
            .collect()
    }

    /// Borrow the tasks in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    fn index_of(&self, position: usize) -> Result<usize> {
        if position == 0 || position > self.tasks.len() {
            return Err(TaskError::OutOfRange {
                position,
                len: self.tasks.len(),
            });
        }
        Ok(position - 1)
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl TryFrom<Vec<String>> for TaskList {
    type Error = TaskError;

    fn try_from(texts: Vec<String>) -> Result<Self> {
        texts
            .into_iter()
            .map(Task::try_from)
            .collect::<Result<Vec<_>>>()
            .map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(texts: &[&str]) -> TaskList {
        let mut tasks = TaskList::new();
        for text in texts {
            tasks.add(text).unwrap();
        }
        tasks
    }

    // =========================================================================
    // Task Tests
    // =========================================================================

    #[test]
    fn test_task_trims_input() {
        let task = Task::new("  buy milk \n").unwrap();
        assert_eq!(task.as_str(), "buy milk");
        assert_eq!(task.to_string(), "buy milk");
    }

    #[test]
    fn test_task_rejects_blank() {
        assert!(matches!(Task::new(""), Err(TaskError::Validation)));
        assert!(matches!(Task::new(" \t\n "), Err(TaskError::Validation)));
    }

    #[test]
    fn test_task_keeps_inner_whitespace() {
        let task = Task::new("call  mom ").unwrap();
        assert_eq!(task.as_str(), "call  mom");
    }

    // =========================================================================
    // Add / Get Tests
    // =========================================================================

    #[test]
    fn test_add_returns_position() {
        let mut tasks = TaskList::new();
        assert_eq!(tasks.add("first").unwrap(), 1);
        assert_eq!(tasks.add("second").unwrap(), 2);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.get(2).unwrap().as_str(), "second");
    }

    #[test]
    fn test_add_blank_leaves_list_unchanged() {
        let mut tasks = list_of(&["keep"]);
        assert!(matches!(tasks.add(""), Err(TaskError::Validation)));
        assert!(matches!(tasks.add("   "), Err(TaskError::Validation)));
        assert_eq!(tasks, list_of(&["keep"]));
    }

    #[test]
    fn test_get_out_of_range() {
        let tasks = list_of(&["a", "b"]);
        assert!(matches!(
            tasks.get(0),
            Err(TaskError::OutOfRange { position: 0, len: 2 })
        ));
        assert!(matches!(
            tasks.get(3),
            Err(TaskError::OutOfRange { position: 3, len: 2 })
        ));
        assert!(TaskList::new().get(1).is_err());
    }

    // =========================================================================
    // Update Tests
    // =========================================================================

    #[test]
    fn test_update_returns_old_task() {
        let mut tasks = list_of(&["old", "other"]);
        let old = tasks.update(1, " new ").unwrap();
        assert_eq!(old.as_str(), "old");
        assert_eq!(tasks.get(1).unwrap().as_str(), "new");
        assert_eq!(tasks.get(2).unwrap().as_str(), "other");
    }

    #[test]
    fn test_update_blank_leaves_list_unchanged() {
        let mut tasks = list_of(&["a"]);
        assert!(matches!(tasks.update(1, ""), Err(TaskError::Validation)));
        assert_eq!(tasks.get(1).unwrap().as_str(), "a");
    }

    #[test]
    fn test_update_checks_position_first() {
        let mut tasks = list_of(&["a"]);
        assert!(matches!(
            tasks.update(5, ""),
            Err(TaskError::OutOfRange { .. })
        ));
    }

    // =========================================================================
    // Remove Tests
    // =========================================================================

    #[test]
    fn test_remove_shifts_positions() {
        let mut tasks = list_of(&["a", "b", "c"]);
        let removed = tasks.remove(2).unwrap();
        assert_eq!(removed.as_str(), "b");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.get(2).unwrap().as_str(), "c");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut tasks = list_of(&["a"]);
        assert!(tasks.remove(0).is_err());
        assert!(tasks.remove(2).is_err());
        assert_eq!(tasks.len(), 1);
    }

    // =========================================================================
    // Listing Tests
    // =========================================================================

    #[test]
    fn test_list_scenario() {
        let mut tasks = TaskList::new();
        tasks.add("buy milk").unwrap();
        tasks.add("walk dog").unwrap();
        assert_eq!(tasks.list(), vec!["1: buy milk", "2: walk dog"]);

        tasks.remove(1).unwrap();
        assert_eq!(tasks.list(), vec!["1: walk dog"]);
    }

    #[test]
    fn test_list_empty() {
        assert!(TaskList::new().list().is_empty());
    }

    #[test]
    fn test_try_from_strings_rejects_blank_entry() {
        let result = TaskList::try_from(vec!["ok".to_string(), "  ".to_string()]);
        assert!(matches!(result, Err(TaskError::Validation)));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let tasks = list_of(&["a", "b"]);
        let json = serde_json::to_string(&tasks).unwrap();
        assert_eq!(json, r#"["a","b"]"#);

        let back: TaskList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tasks);
    }
}
