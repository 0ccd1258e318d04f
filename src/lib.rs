//! Tasklist: a multi-user to-do service.
//!
//! Users own named lists; each list holds manually ordered tasks that are
//! either pending or completed. Every operation takes the acting user
//! explicitly and is checked by one access policy.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and PostgreSQL implementations of the ports
//! - **Services**: Use-case orchestration over the ports
//!
//! # Modules
//!
//! - [`todo`]: Lists, tasks, access policy, and their persistence
//! - [`http`]: actix-web routes, flash messages, and HTML pages
//! - [`config`]: Environment-driven server configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod http;
pub mod telemetry;
pub mod todo;
