//! Ownership policy for lists and tasks.
//!
//! Every service operation asks [`can_act`] before touching the store, so
//! the rule lives in one place.

use super::{Task, TodoList, UserId};

/// Operation a caller wants to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Read a list and its tasks.
    View,
    /// Change a list title.
    Rename,
    /// Remove a list together with its tasks.
    Delete,
    /// Create a task inside a list.
    AddTask,
    /// Change task title, description, or due date.
    EditTask,
    /// Flip task status.
    ToggleTask,
    /// Change task manual order.
    ReorderTask,
    /// Remove a task.
    DeleteTask,
}

impl Action {
    /// Returns `true` for actions that target a single task.
    #[must_use]
    pub const fn targets_task(self) -> bool {
        matches!(
            self,
            Self::EditTask | Self::ToggleTask | Self::ReorderTask | Self::DeleteTask
        )
    }
}

/// Entity an action is checked against.
#[derive(Debug, Clone, Copy)]
pub enum Resource<'a> {
    /// A list on its own.
    List(&'a TodoList),
    /// A task together with the list it was addressed through.
    Task {
        /// Parent list named by the caller.
        list: &'a TodoList,
        /// Target task.
        task: &'a Task,
    },
}

/// Decides whether `user` may perform `action` on `resource`.
///
/// Lists are only accessible to their owner. A task is accessible to its
/// owner or to the owner of its parent list. Task actions on a bare list,
/// or list actions on a task, are refused.
#[must_use]
pub fn can_act(user: UserId, resource: Resource<'_>, action: Action) -> bool {
    match resource {
        Resource::List(list) => !action.targets_task() && list.owner_id() == user,
        Resource::Task { list, task } => {
            action.targets_task() && (task.owner_id() == user || list.owner_id() == user)
        }
    }
}
