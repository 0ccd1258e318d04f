//! Service-level errors shared by list and task operations.

use crate::todo::{
    domain::{Action, ListId, TaskId, TodoDomainError, UserId},
    ports::TodoRepositoryError,
};
use thiserror::Error;

/// Errors returned by list and task services.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TodoDomainError),

    /// The addressed list does not exist.
    #[error("list not found: {0}")]
    ListNotFound(ListId),

    /// The addressed task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The task exists but lives in another list.
    #[error("task {task_id} does not belong to list {list_id}")]
    TaskNotInList {
        /// Addressed task.
        task_id: TaskId,
        /// List named by the caller.
        list_id: ListId,
    },

    /// The caller does not own the target.
    #[error("user {user} is not allowed to perform {action:?}")]
    Forbidden {
        /// Caller identity.
        user: UserId,
        /// Refused action.
        action: Action,
    },

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Coarse classification used at the transport boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input fields.
    Validation,
    /// The target does not exist or is not reachable through the given
    /// parent.
    NotFound,
    /// The caller does not own the target.
    Forbidden,
    /// Infrastructure failure.
    Internal,
}

impl TodoServiceError {
    /// Returns the coarse error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::ListNotFound(_)
            | Self::TaskNotFound(_)
            | Self::TaskNotInList { .. }
            | Self::Repository(
                TodoRepositoryError::ListNotFound(_) | TodoRepositoryError::TaskNotFound(_),
            ) => ErrorKind::NotFound,
            Self::Forbidden { .. } => ErrorKind::Forbidden,
            Self::Repository(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for list and task service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;
