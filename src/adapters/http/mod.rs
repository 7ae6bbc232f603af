//! HTTP adapter - axum routes, handlers, and DTOs.

pub mod worksheet;

pub use worksheet::{worksheet_routes, WorksheetAppState};
