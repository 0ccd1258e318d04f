//! Diesel row models for list and task persistence.

use super::schema::{lists, tasks};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for list records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ListRow {
    /// List identifier.
    pub id: uuid::Uuid,
    /// List title.
    pub title: String,
    /// Owning user.
    pub user_id: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Completion status.
    pub status: String,
    /// Manual order within the list.
    pub sort_order: i32,
    /// Parent list.
    pub lists_id: uuid::Uuid,
    /// Owning user.
    pub user_id: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset applied when a task is updated.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Completion status.
    pub status: String,
    /// Manual order within the list.
    pub sort_order: i32,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
