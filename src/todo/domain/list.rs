//! List aggregate root.

use super::{ListId, ListTitle, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Named container of tasks owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    id: ListId,
    title: ListTitle,
    owner_id: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedListData {
    /// Persisted list identifier.
    pub id: ListId,
    /// Persisted title.
    pub title: ListTitle,
    /// Owning user.
    pub owner_id: UserId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TodoList {
    /// Creates a new list owned by `owner_id`.
    #[must_use]
    pub fn new(owner_id: UserId, title: ListTitle, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ListId::new(),
            title,
            owner_id,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a list from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedListData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            owner_id: data.owner_id,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> ListId {
        self.id
    }

    /// Returns the list title.
    #[must_use]
    pub const fn title(&self) -> &ListTitle {
        &self.title
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the title.
    pub fn rename(&mut self, title: ListTitle, clock: &impl Clock) {
        self.title = title;
        self.updated_at = clock.utc();
    }
}

/// A list paired with the number of tasks it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSummary {
    /// Summarised list.
    pub list: TodoList,
    /// Number of tasks in the list, regardless of status.
    pub task_count: u64,
}
