//! `PostgreSQL` adapters for list and task persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTodoRepository, TodoPgPool};
