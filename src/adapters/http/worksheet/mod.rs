//! Worksheet HTTP adapter module.
//!
//! REST endpoints for worksheet analysis and block rollups.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::WorksheetAppState;
pub use routes::worksheet_routes;
