//! Task list state for `termtodo`.
//!
//! [`TaskList`] is an immutable snapshot: every operation returns a new list
//! and leaves the receiver untouched, so the renderer only ever reads values.

pub mod list;
pub mod task;

pub use list::{RenamePolicy, TaskList};
pub use task::{Task, TaskId};
