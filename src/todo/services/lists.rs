//! Service layer for creating, renaming, deleting, and showing lists.

use super::{error::TodoServiceResult, guard::authorized_list};
use crate::todo::{
    domain::{Action, ListId, ListOverview, ListSummary, ListTitle, TodoList, UserId},
    ports::{ListRepository, TaskRepository},
};
use mockable::Clock;
use std::sync::Arc;

/// Request payload for creating a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateListRequest {
    title: String,
}

impl CreateListRequest {
    /// Creates a request with the raw, unvalidated title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Request payload for renaming a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameListRequest {
    title: String,
}

impl RenameListRequest {
    /// Creates a request with the raw, unvalidated title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// List management service.
#[derive(Clone)]
pub struct ListService<L, T, C>
where
    L: ListRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    lists: Arc<L>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<L, T, C> ListService<L, T, C>
where
    L: ListRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new list service.
    #[must_use]
    pub const fn new(lists: Arc<L>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            lists,
            tasks,
            clock,
        }
    }

    /// Returns the caller's lists, newest first, with task counts.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoServiceError::Repository`] when the lookup
    /// fails.
    pub async fn list_for_owner(&self, user: UserId) -> TodoServiceResult<Vec<ListSummary>> {
        Ok(self.lists.list_summaries(user).await?)
    }

    /// Creates an empty list owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoServiceError::Validation`] when the title is
    /// blank or longer than 255 characters, or
    /// [`super::TodoServiceError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        user: UserId,
        request: CreateListRequest,
    ) -> TodoServiceResult<TodoList> {
        let title = ListTitle::new(request.title)?;
        let list = TodoList::new(user, title, &*self.clock);
        self.lists.store_list(&list).await?;
        tracing::info!(%user, list_id = %list.id(), "list created");
        Ok(list)
    }

    /// Changes the title of a list the caller owns.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoServiceError::ListNotFound`] for unknown lists,
    /// [`super::TodoServiceError::Forbidden`] when the caller is not the
    /// owner, or [`super::TodoServiceError::Validation`] for invalid titles.
    pub async fn rename(
        &self,
        user: UserId,
        list_id: ListId,
        request: RenameListRequest,
    ) -> TodoServiceResult<TodoList> {
        let mut list = authorized_list(&*self.lists, user, list_id, Action::Rename).await?;
        let title = ListTitle::new(request.title)?;
        list.rename(title, &*self.clock);
        self.lists.update_list(&list).await?;
        tracing::info!(%user, %list_id, "list renamed");
        Ok(list)
    }

    /// Deletes a list the caller owns, together with all of its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoServiceError::ListNotFound`] for unknown lists or
    /// [`super::TodoServiceError::Forbidden`] when the caller is not the
    /// owner.
    pub async fn delete(&self, user: UserId, list_id: ListId) -> TodoServiceResult<()> {
        authorized_list(&*self.lists, user, list_id, Action::Delete).await?;
        self.lists.delete_list(list_id).await?;
        tracing::info!(%user, %list_id, "list deleted");
        Ok(())
    }

    /// Loads a list with its tasks grouped by status and summarised.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoServiceError::ListNotFound`] for unknown lists or
    /// [`super::TodoServiceError::Forbidden`] when the caller is not the
    /// owner.
    pub async fn show_with_tasks(
        &self,
        user: UserId,
        list_id: ListId,
    ) -> TodoServiceResult<ListOverview> {
        let list = authorized_list(&*self.lists, user, list_id, Action::View).await?;
        let tasks = self.tasks.tasks_in_list(list_id).await?;
        let overview = ListOverview::new(list, tasks);
        tracing::debug!(
            %list_id,
            total = overview.stats().total,
            completed = overview.stats().completed,
            "list overview loaded"
        );
        Ok(overview)
    }
}
