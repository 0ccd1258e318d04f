//! `PostgreSQL` repository implementation for list and task storage.

use super::{
    models::{ListRow, TaskChangeset, TaskRow},
    schema::{lists, tasks},
};
use crate::todo::{
    domain::{
        ListId, ListSummary, ListTitle, PersistedListData, PersistedTaskData, Task, TaskId,
        TaskOrder, TaskStatus, TaskTitle, TodoList, UserId,
    },
    ports::{ListRepository, TaskRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::HashMap;

/// `PostgreSQL` connection pool type used by the to-do adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// Schema applied by [`PostgresTodoRepository::apply_schema`].
const SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_lists_and_tasks/up.sql");

/// `PostgreSQL`-backed list and task repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool of at most `pool_size` connections to `database_url`.
    ///
    /// Blocks until the pool's initial connections are established.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the database cannot
    /// be reached.
    pub fn connect(database_url: &str, pool_size: u32) -> TodoRepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        Pool::builder()
            .max_size(pool_size)
            .build(manager)
            .map(Self::new)
            .map_err(TodoRepositoryError::persistence)
    }

    /// Opens the pool on the blocking thread pool, then applies the schema.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the database cannot
    /// be reached or the schema cannot be applied.
    pub async fn open(database_url: String, pool_size: u32) -> TodoRepositoryResult<Self> {
        let repository =
            tokio::task::spawn_blocking(move || Self::connect(&database_url, pool_size))
                .await
                .map_err(TodoRepositoryError::persistence)??;
        repository.apply_schema().await?;
        Ok(repository)
    }

    /// Creates the `lists` and `tasks` tables when they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when a connection cannot
    /// be obtained or the DDL fails.
    pub async fn apply_schema(&self) -> TodoRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(SCHEMA_SQL)
                .map_err(TodoRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl ListRepository for PostgresTodoRepository {
    async fn store_list(&self, list: &TodoList) -> TodoRepositoryResult<()> {
        let list_id = list.id();
        let row = to_list_row(list);
        self.run_blocking(move |connection| {
            diesel::insert_into(lists::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TodoRepositoryError::DuplicateList(list_id)
                    }
                    _ => TodoRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update_list(&self, list: &TodoList) -> TodoRepositoryResult<()> {
        let list_id = list.id();
        let title = list.title().as_str().to_owned();
        let updated_at = list.updated_at();
        self.run_blocking(move |connection| {
            let affected = diesel::update(lists::table.find(list_id.into_inner()))
                .set((lists::title.eq(title), lists::updated_at.eq(updated_at)))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TodoRepositoryError::ListNotFound(list_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_list(&self, id: ListId) -> TodoRepositoryResult<Option<TodoList>> {
        self.run_blocking(move |connection| {
            let row = lists::table
                .find(id.into_inner())
                .select(ListRow::as_select())
                .first::<ListRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_list).transpose()
        })
        .await
    }

    async fn list_summaries(&self, owner: UserId) -> TodoRepositoryResult<Vec<ListSummary>> {
        self.run_blocking(move |connection| {
            let rows = lists::table
                .filter(lists::user_id.eq(owner.into_inner()))
                .order_by((lists::created_at.desc(), lists::id.desc()))
                .select(ListRow::as_select())
                .load::<ListRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;

            let list_ids: Vec<uuid::Uuid> = rows.iter().map(|row| row.id).collect();
            let counts: HashMap<uuid::Uuid, i64> = tasks::table
                .filter(tasks::lists_id.eq_any(&list_ids))
                .group_by(tasks::lists_id)
                .select((tasks::lists_id, diesel::dsl::count_star()))
                .load::<(uuid::Uuid, i64)>(connection)
                .map_err(TodoRepositoryError::persistence)?
                .into_iter()
                .collect();

            rows.into_iter()
                .map(|row| {
                    let raw_count = counts.get(&row.id).copied().unwrap_or_default();
                    let task_count =
                        u64::try_from(raw_count).map_err(TodoRepositoryError::persistence)?;
                    Ok(ListSummary {
                        list: row_to_list(row)?,
                        task_count,
                    })
                })
                .collect()
        })
        .await
    }

    async fn delete_list(&self, id: ListId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            // Tasks go with the list through `ON DELETE CASCADE`.
            let affected = diesel::delete(lists::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TodoRepositoryError::ListNotFound(id));
            }
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresTodoRepository {
    async fn store_task(&self, task: &Task) -> TodoRepositoryResult<()> {
        let task_id = task.id();
        let list_id = task.list_id();
        let row = to_task_row(task);
        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TodoRepositoryError::DuplicateTask(task_id)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        TodoRepositoryError::ListNotFound(list_id)
                    }
                    _ => TodoRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update_task(&self, task: &Task) -> TodoRepositoryResult<()> {
        let task_id = task.id();
        let changeset = TaskChangeset {
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            due_date: task.due_date(),
            status: task.status().as_str().to_owned(),
            sort_order: task.order().value(),
            updated_at: task.updated_at(),
        };
        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(task_id.into_inner()))
                .set(&changeset)
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TodoRepositoryError::TaskNotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_task(&self, id: TaskId) -> TodoRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn tasks_in_list(&self, list_id: ListId) -> TodoRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            tasks::table
                .filter(tasks::lists_id.eq(list_id.into_inner()))
                .order_by((
                    tasks::sort_order.asc(),
                    tasks::created_at.asc(),
                    tasks::id.asc(),
                ))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TodoRepositoryError::persistence)?
                .into_iter()
                .map(row_to_task)
                .collect()
        })
        .await
    }

    async fn max_task_order(&self, list_id: ListId) -> TodoRepositoryResult<Option<TaskOrder>> {
        self.run_blocking(move |connection| {
            let max_order = tasks::table
                .filter(tasks::lists_id.eq(list_id.into_inner()))
                .select(diesel::dsl::max(tasks::sort_order))
                .first::<Option<i32>>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            max_order
                .map(|value| TaskOrder::new(i64::from(value)))
                .transpose()
                .map_err(TodoRepositoryError::persistence)
        })
        .await
    }

    async fn delete_task(&self, id: TaskId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TodoRepositoryError::TaskNotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_list_row(list: &TodoList) -> ListRow {
    ListRow {
        id: list.id().into_inner(),
        title: list.title().as_str().to_owned(),
        user_id: list.owner_id().into_inner(),
        created_at: list.created_at(),
        updated_at: list.updated_at(),
    }
}

fn row_to_list(row: ListRow) -> TodoRepositoryResult<TodoList> {
    let title = ListTitle::new(row.title).map_err(TodoRepositoryError::persistence)?;
    Ok(TodoList::from_persisted(PersistedListData {
        id: ListId::from_uuid(row.id),
        title,
        owner_id: UserId::from_uuid(row.user_id),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

fn to_task_row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        due_date: task.due_date(),
        status: task.status().as_str().to_owned(),
        sort_order: task.order().value(),
        lists_id: task.list_id().into_inner(),
        user_id: task.owner_id().into_inner(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TodoRepositoryResult<Task> {
    let TaskRow {
        id,
        title: persisted_title,
        description,
        due_date,
        status: persisted_status,
        sort_order,
        lists_id,
        user_id,
        created_at,
        updated_at,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TodoRepositoryError::persistence)?;
    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TodoRepositoryError::persistence)?;
    let order = TaskOrder::new(i64::from(sort_order)).map_err(TodoRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        list_id: ListId::from_uuid(lists_id),
        owner_id: UserId::from_uuid(user_id),
        title,
        description,
        due_date,
        status,
        order,
        created_at,
        updated_at,
    }))
}
