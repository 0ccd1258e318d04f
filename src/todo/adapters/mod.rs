//! Adapter implementations of the to-do repository ports.

pub mod memory;
pub mod postgres;
