//! HTTP handlers for worksheet endpoints.
//!
//! These handlers connect axum routes to the application layer.
//! Authentication is a user id carried in the `x-user-id` header; the
//! surrounding gateway is responsible for validating it.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    AnalyzeWorksheetCommand, AnalyzeWorksheetHandler, GetBlockRollupHandler,
};
use crate::domain::foundation::{BlockId, SubcomponentId, UserId};
use crate::ports::ScoreRepository;

use super::dto::{AnalyzeWorksheetRequest, ErrorResponse, ScoreWorksheetRequest};

/// Worksheet API error that implements IntoResponse.
pub enum WorksheetApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for WorksheetApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            WorksheetApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            WorksheetApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

/// Shared state for the worksheet routes.
#[derive(Clone)]
pub struct WorksheetAppState {
    pub score_repository: Arc<dyn ScoreRepository>,
    /// From `features.persist_analysis`.
    pub persist_analysis: bool,
}

impl WorksheetAppState {
    pub fn analyze_handler(&self) -> AnalyzeWorksheetHandler {
        AnalyzeWorksheetHandler::new(self.score_repository.clone())
            .store_analysis_payload(self.persist_analysis)
    }

    pub fn rollup_handler(&self) -> GetBlockRollupHandler {
        GetBlockRollupHandler::new(self.score_repository.clone())
    }
}

/// Authenticated user context extracted from the `x-user-id` header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Rejection type for AuthenticatedUser extraction.
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::unauthorized("Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user_id = parts
                .headers
                .get("x-user-id")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<UserId>().ok())
                .ok_or(AuthenticationRequired)?;

            Ok(AuthenticatedUser { user_id })
        })
    }
}

/// POST /api/worksheets/analyze - analyze and persist the score.
pub async fn analyze_worksheet(
    State(state): State<WorksheetAppState>,
    user: AuthenticatedUser,
    Json(request): Json<AnalyzeWorksheetRequest>,
) -> Result<impl IntoResponse, WorksheetApiError> {
    if request.block_id.trim().is_empty() {
        return Err(WorksheetApiError::BadRequest("blockId is required".to_string()));
    }
    if request.subcomponent_id.trim().is_empty() {
        return Err(WorksheetApiError::BadRequest(
            "subcomponentId is required".to_string(),
        ));
    }

    let command = AnalyzeWorksheetCommand {
        user_id: user.user_id,
        block_id: BlockId::new(request.block_id),
        subcomponent_id: SubcomponentId::new(request.subcomponent_id),
        input: request.worksheet.into(),
    };

    let response = state.analyze_handler().handle(command).await;
    Ok((StatusCode::OK, Json(response)))
}

/// POST /api/worksheets/score - analyze without persisting.
pub async fn score_worksheet(
    State(state): State<WorksheetAppState>,
    Json(request): Json<ScoreWorksheetRequest>,
) -> impl IntoResponse {
    let result = state.analyze_handler().analyze_only(&request.worksheet.into());
    (StatusCode::OK, Json(result))
}

/// GET /api/blocks/:block_id/rollup - aggregate view of one block.
pub async fn get_block_rollup(
    State(state): State<WorksheetAppState>,
    user: AuthenticatedUser,
    Path(block_id): Path<String>,
) -> Result<impl IntoResponse, WorksheetApiError> {
    let rollup = state
        .rollup_handler()
        .handle(&user.user_id, &BlockId::new(block_id))
        .await
        .map_err(|e| WorksheetApiError::Internal(e.message))?;

    Ok((StatusCode::OK, Json(rollup)))
}
