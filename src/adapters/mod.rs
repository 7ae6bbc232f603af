//! Adapters - Implementations of the ports.
//!
//! - `http` - axum routes and DTOs
//! - `postgres` - sqlx-backed persistence
//! - `memory` - in-memory test doubles

pub mod http;
pub mod memory;
pub mod postgres;
