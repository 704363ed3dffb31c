//! The task list state machine.
//!
//! A [`TaskList`] holds the ordered tasks and a single edit pointer. All
//! operations are pure: they return a new snapshot and never fail. Input that
//! cannot be applied (blank text, unknown id) yields an unchanged snapshot.

use std::sync::Arc;

use crate::task::{Task, TaskId};

/// What a rename does when the new text trims to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenamePolicy {
    /// Keep the previous text, as `add` ignores blank input.
    #[default]
    RejectEmpty,
    /// Store the empty text.
    AllowEmpty,
}

/// Immutable snapshot of the task list.
///
/// Tasks live in a shared slice. Operations that change the tasks build a new
/// slice; operations that don't hand back a snapshot sharing the old one, which
/// [`shares_tasks_with`](Self::shares_tasks_with) can detect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    /// Tasks in insertion (display) order.
    tasks: Arc<[Task]>,
    /// The task currently being renamed. Always names a task in `tasks`.
    editing: Option<TaskId>,
}

impl TaskList {
    /// Creates an empty list with nothing being edited.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Arc::from(Vec::new()),
            editing: None,
        }
    }

    /// Tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Display index of a task.
    #[must_use]
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// The task in rename mode, if any.
    #[must_use]
    pub const fn editing_id(&self) -> Option<&TaskId> {
        self.editing.as_ref()
    }

    #[must_use]
    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.editing.as_ref() == Some(id)
    }

    /// Number of tasks checked off.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Returns `true` if both snapshots hold the very same task slice.
    #[must_use]
    pub fn shares_tasks_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }

    /// Appends a new incomplete task.
    ///
    /// Text that is blank after trimming is ignored. Accepted text is stored
    /// as given.
    #[must_use]
    pub fn add(&self, text: &str) -> Self {
        if text.trim().is_empty() {
            return self.clone();
        }
        let tasks = self
            .tasks
            .iter()
            .cloned()
            .chain(std::iter::once(Task::new(text)))
            .collect();
        Self {
            tasks,
            editing: self.editing.clone(),
        }
    }

    /// Flips the completion flag of a task.
    #[must_use]
    pub fn toggle(&self, id: &TaskId) -> Self {
        self.replace(id, |task| Task {
            completed: !task.completed,
            ..task.clone()
        })
    }

    /// Puts a task into rename mode, replacing any edit in progress.
    ///
    /// An unknown id still overwrites the pointer, leaving nothing in edit.
    #[must_use]
    pub fn start_edit(&self, id: &TaskId) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            editing: self.get(id).map(|t| t.id.clone()),
        }
    }

    /// Completes a rename with the default [`RenamePolicy`].
    #[must_use]
    pub fn finish_edit(&self, id: &TaskId, new_text: &str) -> Self {
        self.finish_edit_with(id, new_text, RenamePolicy::default())
    }

    /// Completes a rename.
    ///
    /// Only the task currently in edit is renamed, to `new_text` trimmed.
    /// The edit pointer is cleared in every case.
    #[must_use]
    pub fn finish_edit_with(&self, id: &TaskId, new_text: &str, policy: RenamePolicy) -> Self {
        let text = new_text.trim();
        let unchanged = !self.is_editing(id)
            || (text.is_empty() && policy == RenamePolicy::RejectEmpty)
            || self.get(id).is_some_and(|t| t.text == text);

        let tasks = if unchanged {
            Arc::clone(&self.tasks)
        } else {
            self.replace(id, |task| Task {
                text: text.to_string(),
                ..task.clone()
            })
            .tasks
        };
        Self {
            tasks,
            editing: None,
        }
    }

    /// Deletes a task, dropping the edit pointer if it named that task.
    #[must_use]
    pub fn remove(&self, id: &TaskId) -> Self {
        if self.position(id).is_none() {
            return self.clone();
        }
        Self {
            tasks: self.tasks.iter().filter(|t| &t.id != id).cloned().collect(),
            editing: self.editing.clone().filter(|editing| editing != id),
        }
    }

    /// Rebuilds the slice with one task swapped out.
    fn replace(&self, id: &TaskId, update: impl FnOnce(&Task) -> Task) -> Self {
        let Some(index) = self.position(id) else {
            return self.clone();
        };
        let mut tasks = self.tasks.to_vec();
        let updated = update(&tasks[index]);
        tasks[index] = updated;
        Self {
            tasks: tasks.into(),
            editing: self.editing.clone(),
        }
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
