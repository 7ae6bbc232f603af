//! Route configuration for worksheet endpoints.
//!
//! Routes:
//! - `POST /api/worksheets/analyze` - analyze a worksheet and persist the score
//! - `POST /api/worksheets/score` - analyze without persisting (preview)
//! - `GET /api/blocks/:block_id/rollup` - aggregate view of a block

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    analyze_worksheet, get_block_rollup, score_worksheet, WorksheetAppState,
};

/// Creates the worksheet router with all endpoints.
pub fn worksheet_routes(state: WorksheetAppState) -> Router {
    Router::new()
        .route("/api/worksheets/analyze", post(analyze_worksheet))
        .route("/api/worksheets/score", post(score_worksheet))
        .route("/api/blocks/:block_id/rollup", get(get_block_rollup))
        .with_state(state)
}
