//! Task entity, its status, and editable details.

use super::{ListId, ParseTaskStatusError, TaskId, TaskOrder, TaskTitle, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Completion status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task still has to be done.
    #[default]
    Pending,
    /// Task has been done.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Returns the opposite status.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Direction of a status toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTransition {
    /// The task moved from pending to completed.
    Completed,
    /// The task moved from completed back to pending.
    Reopened,
}

impl StatusTransition {
    const fn into_status(self) -> TaskStatus {
        match self {
            Self::Completed => TaskStatus::Completed,
            Self::Reopened => TaskStatus::Pending,
        }
    }

    /// Returns the user-facing confirmation for this transition.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Completed => "Task completed!",
            Self::Reopened => "Task reopened!",
        }
    }
}

/// Caller-editable task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    title: TaskTitle,
    description: Option<String>,
    due_date: Option<NaiveDate>,
}

impl TaskDetails {
    /// Creates details with only a title.
    #[must_use]
    pub const fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: None,
            due_date: None,
        }
    }

    /// Sets the description. Blank descriptions are dropped.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let text = description.into();
        self.description = (!text.trim().is_empty()).then_some(text);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Single to-do item inside a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    list_id: ListId,
    owner_id: UserId,
    title: TaskTitle,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    status: TaskStatus,
    order: TaskOrder,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// List the task belongs to.
    pub list_id: ListId,
    /// Owning user.
    pub owner_id: UserId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted manual order.
    pub order: TaskOrder,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task at `order` inside `list_id`.
    #[must_use]
    pub fn new(
        list_id: ListId,
        owner_id: UserId,
        details: TaskDetails,
        order: TaskOrder,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            list_id,
            owner_id,
            title: details.title,
            description: details.description,
            due_date: details.due_date,
            status: TaskStatus::Pending,
            order,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            list_id: data.list_id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            status: data.status,
            order: data.order,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the list the task belongs to.
    #[must_use]
    pub const fn list_id(&self) -> ListId {
        self.list_id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the manual order.
    #[must_use]
    pub const fn order(&self) -> TaskOrder {
        self.order
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

    /// Returns `true` when the task lives in `list_id`.
    #[must_use]
    pub fn belongs_to(&self, list_id: ListId) -> bool {
        self.list_id == list_id
    }

    /// Replaces title, description, and due date. Status and order are kept.
    pub fn update_details(&mut self, details: TaskDetails, clock: &impl Clock) {
        self.title = details.title;
        self.description = details.description;
        self.due_date = details.due_date;
        self.touch(clock);
    }

    /// Flips the status and reports which way it went.
    pub fn toggle(&mut self, clock: &impl Clock) -> StatusTransition {
        let transition = match self.status {
            TaskStatus::Pending => StatusTransition::Completed,
            TaskStatus::Completed => StatusTransition::Reopened,
        };
        self.status = transition.into_status();
        self.touch(clock);
        transition
    }

    /// Moves the task to `order` without touching any sibling.
    pub fn move_to(&mut self, order: TaskOrder, clock: &impl Clock) {
        self.order = order;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
