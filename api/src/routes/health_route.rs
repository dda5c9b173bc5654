use std::sync::Arc;

use ai_llm_service::HealthStatus;
use axum::{Json, extract::State};
use serde::Serialize;

use crate::{core::app_state::AppState, ui::variant::PageVariant};

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok`, or `degraded` when the upstream probe failed.
    pub status: &'static str,
    pub answer_table_entries: usize,
    pub variant: PageVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream: Option<HealthStatus>,
}

/// Handler: GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    let upstream = match &state.upstream {
        Some(probe) => Some(probe.check().await),
        None => None,
    };
    let degraded = upstream.as_ref().is_some_and(|s| !s.ok);

    Json(HealthReport {
        status: if degraded { "degraded" } else { "ok" },
        answer_table_entries: state.resolver.table().len(),
        variant: state.config.variant,
        upstream,
    })
}
