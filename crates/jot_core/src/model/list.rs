//! Ordered task list with positional access.
//!
//! # Responsibility
//! - Hold tasks in insertion order; insertion order is display order and
//!   persistence order.
//! - Bounds-check every positional operation.
//!
//! # Invariants
//! - The list is never reordered or deduplicated.
//! - Positions are 0-based and shift when earlier entries are removed.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ListResult<T> = Result<T, ListError>;

/// Positional access failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The requested position is outside `[0, len)`. `index` is the
    /// 0-based position as computed from user input, so it can be negative.
    IndexOutOfRange { index: i64, len: usize },
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => write!(
                f,
                "There is no task number {}; the list has {} {}.",
                index + 1,
                len,
                if *len == 1 { "task" } else { "tasks" }
            ),
        }
    }
}

impl Error for ListError {}

/// Ordered, mutable collection of tasks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    items: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task and returns the new list size.
    pub fn add(&mut self, task: Task) -> usize {
        self.items.push(task);
        self.items.len()
    }

    /// Removes and returns the task at `pos`.
    pub fn remove_at(&mut self, pos: i64) -> ListResult<Task> {
        let idx = self.checked_index(pos)?;
        Ok(self.items.remove(idx))
    }

    /// Flips completion of the task at `pos` and returns a view of it.
    pub fn toggle_done_at(&mut self, pos: i64) -> ListResult<&Task> {
        let idx = self.checked_index(pos)?;
        self.items[idx].toggle_done();
        Ok(&self.items[idx])
    }

    pub fn get(&self, pos: i64) -> ListResult<&Task> {
        let idx = self.checked_index(pos)?;
        Ok(&self.items[idx])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Tasks in list order, for display and serialization.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.items.iter()
    }

    fn checked_index(&self, pos: i64) -> ListResult<usize> {
        let len = self.items.len();
        match usize::try_from(pos) {
            Ok(idx) if idx < len => Ok(idx),
            _ => Err(ListError::IndexOutOfRange { index: pos, len }),
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
