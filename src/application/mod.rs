//! Application layer - use-case orchestration.
//!
//! Handlers wire the pure analysis engine to the persistence ports.
//! They never contain scoring logic of their own.

pub mod handlers;
