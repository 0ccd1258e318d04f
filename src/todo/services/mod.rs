//! Application services for list and task management.

mod error;
mod guard;
mod lists;
mod tasks;

pub use error::{ErrorKind, TodoServiceError, TodoServiceResult};
pub use lists::{CreateListRequest, ListService, RenameListRequest};
pub use tasks::{TaskDetailsRequest, TaskService, ToggleOutcome};
