//! Lookup-then-authorise steps run at the top of every service operation.

use super::error::{TodoServiceError, TodoServiceResult};
use crate::todo::{
    domain::{Action, ListId, Resource, Task, TaskId, TodoList, UserId, can_act},
    ports::{ListRepository, TaskRepository},
};

/// Loads a list and checks `user` may perform `action` on it.
pub(super) async fn authorized_list<L>(
    lists: &L,
    user: UserId,
    list_id: ListId,
    action: Action,
) -> TodoServiceResult<TodoList>
where
    L: ListRepository + ?Sized,
{
    let list = lists
        .find_list(list_id)
        .await?
        .ok_or(TodoServiceError::ListNotFound(list_id))?;
    if !can_act(user, Resource::List(&list), action) {
        tracing::warn!(%user, %list_id, ?action, "list access refused");
        return Err(TodoServiceError::Forbidden { user, action });
    }
    Ok(list)
}

/// Loads a task through its parent list and checks `user` may perform
/// `action` on it.
///
/// A task that exists but lives in another list is reported as
/// [`TodoServiceError::TaskNotInList`].
pub(super) async fn authorized_task<L, T>(
    lists: &L,
    tasks: &T,
    user: UserId,
    (list_id, task_id): (ListId, TaskId),
    action: Action,
) -> TodoServiceResult<(TodoList, Task)>
where
    L: ListRepository + ?Sized,
    T: TaskRepository + ?Sized,
{
    let list = lists
        .find_list(list_id)
        .await?
        .ok_or(TodoServiceError::ListNotFound(list_id))?;
    let task = tasks
        .find_task(task_id)
        .await?
        .ok_or(TodoServiceError::TaskNotFound(task_id))?;
    if !task.belongs_to(list_id) {
        return Err(TodoServiceError::TaskNotInList { task_id, list_id });
    }
    if !can_act(
        user,
        Resource::Task {
            list: &list,
            task: &task,
        },
        action,
    ) {
        tracing::warn!(%user, %list_id, %task_id, ?action, "task access refused");
        return Err(TodoServiceError::Forbidden { user, action });
    }
    Ok((list, task))
}
