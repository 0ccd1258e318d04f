//! In-memory list and task store.
//!
//! Both repository ports are implemented by one [`InMemoryTodoStore`] so
//! that deleting a list can remove its tasks in the same critical section.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::todo::{
    domain::{ListId, ListSummary, Task, TaskId, TaskOrder, TodoList, UserId, display_order},
    ports::{ListRepository, TaskRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory store for lists and tasks.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStore {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    lists: HashMap<ListId, TodoList>,
    tasks: HashMap<TaskId, Task>,
}

impl InMemoryTodoState {
    fn tasks_of(&self, list_id: ListId) -> impl Iterator<Item = &Task> {
        self.tasks
            .values()
            .filter(move |task| task.belongs_to(list_id))
    }
}

impl InMemoryTodoStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TodoRepositoryResult<RwLockReadGuard<'_, InMemoryTodoState>> {
        self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TodoRepositoryResult<RwLockWriteGuard<'_, InMemoryTodoState>> {
        self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl ListRepository for InMemoryTodoStore {
    async fn store_list(&self, list: &TodoList) -> TodoRepositoryResult<()> {
        let mut state = self.write()?;
        if state.lists.contains_key(&list.id()) {
            return Err(TodoRepositoryError::DuplicateList(list.id()));
        }
        state.lists.insert(list.id(), list.clone());
        Ok(())
    }

    async fn update_list(&self, list: &TodoList) -> TodoRepositoryResult<()> {
        let mut state = self.write()?;
        let slot = state
            .lists
            .get_mut(&list.id())
            .ok_or(TodoRepositoryError::ListNotFound(list.id()))?;
        *slot = list.clone();
        Ok(())
    }

    async fn find_list(&self, id: ListId) -> TodoRepositoryResult<Option<TodoList>> {
        let state = self.read()?;
        Ok(state.lists.get(&id).cloned())
    }

    async fn list_summaries(&self, owner: UserId) -> TodoRepositoryResult<Vec<ListSummary>> {
        let state = self.read()?;
        let mut summaries: Vec<ListSummary> = state
            .lists
            .values()
            .filter(|list| list.owner_id() == owner)
            .map(|list| ListSummary {
                list: list.clone(),
                task_count: state.tasks_of(list.id()).count() as u64,
            })
            .collect();
        summaries.sort_by(|left, right| {
            right
                .list
                .created_at()
                .cmp(&left.list.created_at())
                .then_with(|| right.list.id().cmp(&left.list.id()))
        });
        Ok(summaries)
    }

    async fn delete_list(&self, id: ListId) -> TodoRepositoryResult<()> {
        let mut state = self.write()?;
        if state.lists.remove(&id).is_none() {
            return Err(TodoRepositoryError::ListNotFound(id));
        }
        state.tasks.retain(|_, task| !task.belongs_to(id));
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryTodoStore {
    async fn store_task(&self, task: &Task) -> TodoRepositoryResult<()> {
        let mut state = self.write()?;
        if !state.lists.contains_key(&task.list_id()) {
            return Err(TodoRepositoryError::ListNotFound(task.list_id()));
        }
        if state.tasks.contains_key(&task.id()) {
            return Err(TodoRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update_task(&self, task: &Task) -> TodoRepositoryResult<()> {
        let mut state = self.write()?;
        let slot = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TodoRepositoryError::TaskNotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn find_task(&self, id: TaskId) -> TodoRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn tasks_in_list(&self, list_id: ListId) -> TodoRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let mut tasks: Vec<Task> = state.tasks_of(list_id).cloned().collect();
        tasks.sort_by(display_order);
        Ok(tasks)
    }

    async fn max_task_order(&self, list_id: ListId) -> TodoRepositoryResult<Option<TaskOrder>> {
        let state = self.read()?;
        Ok(state.tasks_of(list_id).map(Task::order).max())
    }

    async fn delete_task(&self, id: TaskId) -> TodoRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoRepositoryError::TaskNotFound(id))
    }
}
