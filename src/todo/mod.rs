//! List and task management.
//!
//! Users own named lists; each list holds tasks with a pending/completed
//! status and a manual order. The module follows hexagonal architecture:
//!
//! - Domain types, the ownership policy, and status grouping in [`domain`]
//! - Repository contracts in [`ports`]
//! - In-memory and `PostgreSQL` implementations in [`adapters`]
//! - List and task orchestration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
