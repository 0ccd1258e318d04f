//! Status grouping and completion statistics for a single list.

use super::{Task, TaskStatus, TodoList};
use serde::Serialize;
use std::cmp::Ordering;

/// Completion counters for a list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletionStats {
    /// Number of tasks in the list.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of pending tasks.
    pub pending: usize,
    /// Completed share in percent, rounded to one decimal place.
    pub completion_percentage: f64,
}

impl CompletionStats {
    /// Computes statistics from completed and pending counts.
    #[must_use]
    pub fn from_counts(completed: usize, pending: usize) -> Self {
        let total = completed + pending;
        Self {
            total,
            completed,
            pending,
            completion_percentage: completion_percentage(completed, total),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "percentages are presentation values over small task counts"
)]
fn completion_percentage(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ratio = completed as f64 / total as f64;
    (ratio * 1000.0).round() / 10.0
}

/// Display ordering for tasks: manual order, then creation time, then id.
#[must_use]
pub fn display_order(left: &Task, right: &Task) -> Ordering {
    left.order()
        .cmp(&right.order())
        .then_with(|| left.created_at().cmp(&right.created_at()))
        .then_with(|| left.id().cmp(&right.id()))
}

/// A list with its tasks split by status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListOverview {
    list: TodoList,
    pending: Vec<Task>,
    completed: Vec<Task>,
    stats: CompletionStats,
}

impl ListOverview {
    /// Groups `tasks` of `list` by status.
    ///
    /// Tasks are sorted into display order first, so both groups keep that
    /// order.
    #[must_use]
    pub fn new(list: TodoList, mut tasks: Vec<Task>) -> Self {
        tasks.sort_by(display_order);
        let (completed, pending): (Vec<Task>, Vec<Task>) = tasks
            .into_iter()
            .partition(|task| task.status() == TaskStatus::Completed);
        let stats = CompletionStats::from_counts(completed.len(), pending.len());
        Self {
            list,
            pending,
            completed,
            stats,
        }
    }

    /// Returns the list.
    #[must_use]
    pub const fn list(&self) -> &TodoList {
        &self.list
    }

    /// Returns pending tasks in display order.
    #[must_use]
    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    /// Returns completed tasks in display order.
    #[must_use]
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Returns the completion statistics.
    #[must_use]
    pub const fn stats(&self) -> CompletionStats {
        self.stats
    }
}
