//! Port contracts for list and task storage.
//!
//! Ports define infrastructure-agnostic interfaces used by the to-do
//! services.

pub mod repository;

pub use repository::{ListRepository, TaskRepository, TodoRepositoryError, TodoRepositoryResult};
