//! Error types for to-do domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing validated list and task values.
///
/// Every variant names the input field it rejects so callers can surface
/// field-level messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// A title is empty after trimming.
    #[error("{field} must not be empty")]
    EmptyTitle {
        /// Input field carrying the title.
        field: &'static str,
    },

    /// A title exceeds the persisted column width.
    #[error("{field} must be at most {max} characters, got {actual}")]
    TitleTooLong {
        /// Input field carrying the title.
        field: &'static str,
        /// Maximum accepted length in characters.
        max: usize,
        /// Length of the rejected value in characters.
        actual: usize,
    },

    /// A manual order is below one.
    #[error("{field} must be an integer greater than or equal to 1, got {value}")]
    InvalidOrder {
        /// Input field carrying the order.
        field: &'static str,
        /// Rejected value.
        value: i64,
    },

    /// A manual order does not fit the persisted integer column.
    #[error("{field} must be at most {max}, got {value}")]
    OrderOutOfRange {
        /// Input field carrying the order.
        field: &'static str,
        /// Largest accepted value.
        max: i64,
        /// Rejected value.
        value: i64,
    },
}

impl TodoDomainError {
    /// Returns the name of the input field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle { field }
            | Self::TitleTooLong { field, .. }
            | Self::InvalidOrder { field, .. }
            | Self::OrderOutOfRange { field, .. } => field,
        }
    }

    /// Returns the same error reported against a different input field.
    #[must_use]
    pub const fn with_field(self, name: &'static str) -> Self {
        match self {
            Self::EmptyTitle { .. } => Self::EmptyTitle { field: name },
            Self::TitleTooLong { max, actual, .. } => Self::TitleTooLong {
                field: name,
                max,
                actual,
            },
            Self::InvalidOrder { value, .. } => Self::InvalidOrder { field: name, value },
            Self::OrderOutOfRange { max, value, .. } => Self::OrderOutOfRange {
                field: name,
                max,
                value,
            },
        }
    }
}

/// Error returned while parsing task statuses from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
