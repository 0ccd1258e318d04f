//! Validated scalar values shared by lists and tasks.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum title length in characters, matching `VARCHAR(255)`.
pub const MAX_TITLE_LENGTH: usize = 255;

const TITLE_FIELD: &str = "title";
const ORDER_FIELD: &str = "order";

fn validated_title(raw: String) -> Result<String, TodoDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TodoDomainError::EmptyTitle { field: TITLE_FIELD });
    }
    let length = trimmed.chars().count();
    if length > MAX_TITLE_LENGTH {
        return Err(TodoDomainError::TitleTooLong {
            field: TITLE_FIELD,
            max: MAX_TITLE_LENGTH,
            actual: length,
        });
    }
    Ok(trimmed.to_owned())
}

/// Validated, trimmed list title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListTitle(String);

impl ListTitle {
    /// Creates a validated list title.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] when the value is blank, or
    /// [`TodoDomainError::TitleTooLong`] when it exceeds
    /// [`MAX_TITLE_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        validated_title(value.into()).map(Self)
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ListTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ListTitle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Validated, trimmed task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] when the value is blank, or
    /// [`TodoDomainError::TitleTooLong`] when it exceeds
    /// [`MAX_TITLE_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        validated_title(value.into()).map(Self)
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Manual position of a task within its list.
///
/// Orders start at one and are never renormalised; two tasks may share
/// the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskOrder(i32);

impl TaskOrder {
    /// Order assigned to the first task of an empty list.
    pub const FIRST: Self = Self(1);

    /// Creates a validated order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidOrder`] when the value is below one
    /// or [`TodoDomainError::OrderOutOfRange`] when it exceeds `i32::MAX`.
    pub fn new(value: i64) -> Result<Self, TodoDomainError> {
        if value < 1 {
            return Err(TodoDomainError::InvalidOrder {
                field: ORDER_FIELD,
                value,
            });
        }
        i32::try_from(value)
            .map(Self)
            .map_err(|_| TodoDomainError::OrderOutOfRange {
                field: ORDER_FIELD,
                max: i64::from(i32::MAX),
                value,
            })
    }

    /// Returns the order that follows this one.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::OrderOutOfRange`] when this order is
    /// already the largest persisted value.
    pub fn next(self) -> Result<Self, TodoDomainError> {
        Self::new(i64::from(self.0) + 1)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl Default for TaskOrder {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for TaskOrder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
