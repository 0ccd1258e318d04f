//! Domain model for lists, tasks, and their ordering.
//!
//! The domain keeps task sequencing, status grouping, and the ownership
//! policy free of storage and transport concerns.

pub mod access;
mod error;
mod ids;
mod list;
mod overview;
mod task;
mod values;

pub use access::{Action, Resource, can_act};
pub use error::{ParseTaskStatusError, TodoDomainError};
pub use ids::{ListId, TaskId, UserId};
pub use list::{ListSummary, PersistedListData, TodoList};
pub use overview::{CompletionStats, ListOverview, display_order};
pub use task::{PersistedTaskData, StatusTransition, Task, TaskDetails, TaskStatus};
pub use values::{ListTitle, MAX_TITLE_LENGTH, TaskOrder, TaskTitle};
