//! `POST /api/ask`: resolves a question and returns the answer as JSON.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{info, instrument};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::AppResult,
    routes::ask::ask_request::{AskRequest, AskResponse},
};

/// Handler: POST /api/ask
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/api/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"What does the claims processing agent (CAM) do?","history":[]}'
/// ```
#[instrument(name = "ask_question_route", skip_all)]
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AskRequest>,
) -> AppResult<ApiResponse<AskResponse>> {
    let AskRequest {
        question,
        mut history,
    } = body;

    let resolution = state.resolver.resolve_into(&question, &mut history).await?;

    info!(source = ?resolution.source, "question answered");

    Ok(ApiResponse::success(AskResponse {
        answer: resolution.answer,
        source: resolution.source,
        history,
    }))
}
