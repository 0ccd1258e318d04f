//! Unit tests for the to-do domain, policy, and services.
