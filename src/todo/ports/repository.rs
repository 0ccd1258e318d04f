//! Repository ports for list and task persistence.

use crate::todo::domain::{ListId, ListSummary, Task, TaskId, TaskOrder, TodoList, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for list and task repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// List persistence contract.
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Stores a new list.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::DuplicateList`] when the identifier is
    /// already taken.
    async fn store_list(&self, list: &TodoList) -> TodoRepositoryResult<()>;

    /// Persists a changed list (title and timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::ListNotFound`] when the list does not
    /// exist.
    async fn update_list(&self, list: &TodoList) -> TodoRepositoryResult<()>;

    /// Finds a list by identifier.
    ///
    /// Returns `None` when the list does not exist.
    async fn find_list(&self, id: ListId) -> TodoRepositoryResult<Option<TodoList>>;

    /// Returns every list owned by `owner` with its task count, newest
    /// first.
    async fn list_summaries(&self, owner: UserId) -> TodoRepositoryResult<Vec<ListSummary>>;

    /// Removes a list and every task it contains.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::ListNotFound`] when the list does not
    /// exist.
    async fn delete_list(&self, id: ListId) -> TodoRepositoryResult<()>;
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::DuplicateTask`] when the identifier is
    /// already taken or [`TodoRepositoryError::ListNotFound`] when the parent
    /// list does not exist.
    async fn store_task(&self, task: &Task) -> TodoRepositoryResult<()>;

    /// Persists a changed task (details, status, order, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn update_task(&self, task: &Task) -> TodoRepositoryResult<()>;

    /// Finds a task by identifier, whatever list it belongs to.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_task(&self, id: TaskId) -> TodoRepositoryResult<Option<Task>>;

    /// Returns every task of a list ordered by manual order, then creation
    /// time.
    async fn tasks_in_list(&self, list_id: ListId) -> TodoRepositoryResult<Vec<Task>>;

    /// Returns the largest manual order used in `list_id`, or `None` when
    /// the list has no tasks.
    async fn max_task_order(&self, list_id: ListId) -> TodoRepositoryResult<Option<TaskOrder>>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn delete_task(&self, id: TaskId) -> TodoRepositoryResult<()>;
}

/// Errors returned by list and task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// A list with the same identifier already exists.
    #[error("duplicate list identifier: {0}")]
    DuplicateList(ListId),

    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The list was not found.
    #[error("list not found: {0}")]
    ListNotFound(ListId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
