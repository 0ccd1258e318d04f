//! Service layer for task creation, editing, toggling, reordering, and
//! removal.

use super::{
    error::TodoServiceResult,
    guard::{authorized_list, authorized_task},
};
use crate::todo::{
    domain::{
        Action, ListId, StatusTransition, Task, TaskDetails, TaskId, TaskOrder, TaskTitle,
        TodoDomainError, UserId,
    },
    ports::{ListRepository, TaskRepository},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;

/// Input field carrying the requested order on reorder.
const NEW_ORDER_FIELD: &str = "new_order";

/// Request payload for creating or editing a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetailsRequest {
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
}

impl TaskDetailsRequest {
    /// Creates a request with the raw, unvalidated title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    fn into_details(self) -> Result<TaskDetails, TodoDomainError> {
        let mut details = TaskDetails::new(TaskTitle::new(self.title)?);
        if let Some(description) = self.description {
            details = details.with_description(description);
        }
        if let Some(due_date) = self.due_date {
            details = details.with_due_date(due_date);
        }
        Ok(details)
    }
}

/// Result of toggling a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Task after the toggle.
    pub task: Task,
    /// Direction of the toggle.
    pub transition: StatusTransition,
}

impl ToggleOutcome {
    /// Returns the user-facing confirmation message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.transition.message()
    }
}

/// Task management service.
#[derive(Clone)]
pub struct TaskService<L, T, C>
where
    L: ListRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    lists: Arc<L>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<L, T, C> TaskService<L, T, C>
where
    L: ListRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(lists: Arc<L>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            lists,
            tasks,
            clock,
        }
    }

    /// Appends a pending task to a list the caller owns.
    ///
    /// The new task takes one past the largest order in the list, or 1 when
    /// the list is empty.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoServiceError::ListNotFound`],
    /// [`super::TodoServiceError::Forbidden`], or
    /// [`super::TodoServiceError::Validation`] for a bad title or an order
    /// that would overflow.
    pub async fn create(
        &self,
        user: UserId,
        list_id: ListId,
        request: TaskDetailsRequest,
    ) -> TodoServiceResult<Task> {
        let list = authorized_list(&*self.lists, user, list_id, Action::AddTask).await?;
        let details = request.into_details()?;
        let order = match self.tasks.max_task_order(list.id()).await? {
            Some(max) => max.next()?,
            None => TaskOrder::FIRST,
        };
        let task = Task::new(list.id(), user, details, order, &*self.clock);
        self.tasks.store_task(&task).await?;
        tracing::info!(%user, %list_id, task_id = %task.id(), %order, "task created");
        Ok(task)
    }

    /// Replaces title, description, and due date of a task.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoServiceError::TaskNotInList`] when the task lives
    /// elsewhere, the not-found variants for unknown ids,
    /// [`super::TodoServiceError::Forbidden`], or
    /// [`super::TodoServiceError::Validation`].
    pub async fn update(
        &self,
        user: UserId,
        list_id: ListId,
        task_id: TaskId,
        request: TaskDetailsRequest,
    ) -> TodoServiceResult<Task> {
        let (_, mut task) = authorized_task(
            &*self.lists,
            &*self.tasks,
            user,
            (list_id, task_id),
            Action::EditTask,
        )
        .await?;
        task.update_details(request.into_details()?, &*self.clock);
        self.tasks.update_task(&task).await?;
        tracing::info!(%user, %list_id, %task_id, "task updated");
        Ok(task)
    }

    /// Flips a task between pending and completed.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoServiceError::TaskNotInList`], the not-found
    /// variants, or [`super::TodoServiceError::Forbidden`].
    pub async fn toggle(
        &self,
        user: UserId,
        list_id: ListId,
        task_id: TaskId,
    ) -> TodoServiceResult<ToggleOutcome> {
        let (_, mut task) = authorized_task(
            &*self.lists,
            &*self.tasks,
            user,
            (list_id, task_id),
            Action::ToggleTask,
        )
        .await?;
        let transition = task.toggle(&*self.clock);
        self.tasks.update_task(&task).await?;
        tracing::info!(%user, %list_id, %task_id, ?transition, "task toggled");
        Ok(ToggleOutcome { task, transition })
    }

    /// Sets the manual order of one task. Sibling orders are left as they
    /// are, so duplicates are possible.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoServiceError::Validation`] on the `new_order`
    /// field when it is below 1 or out of range,
    /// [`super::TodoServiceError::TaskNotInList`], the not-found variants, or
    /// [`super::TodoServiceError::Forbidden`].
    pub async fn reorder(
        &self,
        user: UserId,
        list_id: ListId,
        task_id: TaskId,
        new_order: i64,
    ) -> TodoServiceResult<Task> {
        let (_, mut task) = authorized_task(
            &*self.lists,
            &*self.tasks,
            user,
            (list_id, task_id),
            Action::ReorderTask,
        )
        .await?;
        let order = TaskOrder::new(new_order).map_err(|err| err.with_field(NEW_ORDER_FIELD))?;
        task.move_to(order, &*self.clock);
        self.tasks.update_task(&task).await?;
        tracing::info!(%user, %list_id, %task_id, %order, "task reordered");
        Ok(task)
    }

    /// Removes a task from its list.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoServiceError::TaskNotInList`], the not-found
    /// variants, or [`super::TodoServiceError::Forbidden`].
    pub async fn delete(
        &self,
        user: UserId,
        list_id: ListId,
        task_id: TaskId,
    ) -> TodoServiceResult<()> {
        authorized_task(
            &*self.lists,
            &*self.tasks,
            user,
            (list_id, task_id),
            Action::DeleteTask,
        )
        .await?;
        self.tasks.delete_task(task_id).await?;
        tracing::info!(%user, %list_id, %task_id, "task deleted");
        Ok(())
    }
}
