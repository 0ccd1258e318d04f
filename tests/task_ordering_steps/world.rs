//! Shared world state for task ordering BDD scenarios.

use crate::test_helpers::{Services, in_memory_services};
use rstest::fixture;
use std::collections::HashMap;
use tasklist::todo::{
    adapters::memory::InMemoryTodoStore,
    domain::{Task, TaskId, TodoList, UserId},
    services::TodoServiceError,
};

/// Scenario world for task ordering behaviour tests.
pub struct OrderingWorld {
    pub services: Services<InMemoryTodoStore>,
    pub owner: UserId,
    pub list: Option<TodoList>,
    pub task_ids: HashMap<String, TaskId>,
    pub last_move: Option<Result<Task, TodoServiceError>>,
}

impl OrderingWorld {
    /// Creates a world with one user and no lists.
    #[must_use]
    pub fn new() -> Self {
        Self {
            services: in_memory_services(),
            owner: UserId::new(),
            list: None,
            task_ids: HashMap::new(),
            last_move: None,
        }
    }

    /// Returns the list created by the scenario.
    pub fn list(&self) -> Result<&TodoList, eyre::Report> {
        self.list
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing list in scenario world"))
    }

    /// Returns the identifier of the task titled `title`.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.task_ids
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in scenario world"))
    }
}

impl Default for OrderingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> OrderingWorld {
    OrderingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
