//! Shared clock and service wiring for integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tasklist::todo::{
    adapters::memory::InMemoryTodoStore,
    ports::{ListRepository, TaskRepository},
    services::{ListService, TaskService},
};

/// Clock that advances one second per reading so creation order is visible
/// in timestamps even for back-to-back calls.
#[derive(Debug)]
pub struct SteppingClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    /// Starts the clock at 2026-01-01 09:00 UTC.
    pub fn new() -> Self {
        let base = Utc
            .with_ymd_and_hms(2026, 1, 1, 9, 0, 0)
            .single()
            .unwrap_or_default();
        Self {
            base,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + chrono::Duration::seconds(tick)
    }
}

/// List and task services over one shared store.
pub struct Services<S>
where
    S: ListRepository + TaskRepository,
{
    /// List operations.
    pub lists: ListService<S, S, SteppingClock>,
    /// Task operations.
    pub tasks: TaskService<S, S, SteppingClock>,
}

/// Wires both services over `store` with a fresh [`SteppingClock`].
pub fn services<S>(store: Arc<S>) -> Services<S>
where
    S: ListRepository + TaskRepository,
{
    let clock = Arc::new(SteppingClock::new());
    Services {
        lists: ListService::new(Arc::clone(&store), Arc::clone(&store), Arc::clone(&clock)),
        tasks: TaskService::new(Arc::clone(&store), store, clock),
    }
}

/// Services over a fresh in-memory store.
pub fn in_memory_services() -> Services<InMemoryTodoStore> {
    services(Arc::new(InMemoryTodoStore::new()))
}
