//! Task identity and the task record itself.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a task, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier assigned at creation.
    pub id: TaskId,
    /// Task text as entered (trimmed once renamed).
    pub text: String,
    /// Whether the task has been checked off.
    pub completed: bool,
}

impl Task {
    /// Creates an incomplete task with a fresh identifier.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
            completed: false,
        }
    }
}
