//! Server-rendered widget page: `GET /` and `POST /`.

use std::sync::Arc;

use answer_resolver::{ResolverError, SessionHistory};
use axum::{
    Form,
    extract::State,
    response::Html,
};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::{
    core::app_state::AppState,
    error_handler::user_message,
    ui::render::{Notice, PageView, render_page},
};

/// Form fields posted by the page.
#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub question: String,
    /// JSON-encoded [`SessionHistory`] carried in a hidden field.
    #[serde(default)]
    pub history: Option<String>,
}

/// Handler: GET /
pub async fn show_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(state.config.variant, &PageView::default()))
}

/// Handler: POST /
///
/// Always answers with a full page; failures become an on-page message and
/// leave the carried history unchanged.
#[instrument(name = "submit_page", skip_all)]
pub async fn submit_page(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AskForm>,
) -> Html<String> {
    let variant = state.config.variant;
    let mut history = if variant.keeps_history() {
        decode_history(form.history.as_deref())
    } else {
        SessionHistory::new()
    };

    let outcome = if variant.keeps_history() {
        state.resolver.resolve_into(&form.question, &mut history).await
    } else {
        state.resolver.resolve(&form.question).await
    };

    let view = match outcome {
        Ok(res) => {
            info!(source = ?res.source, "page question answered");
            PageView {
                question: form.question,
                answer: Some(res.answer),
                notice: None,
                history,
            }
        }
        Err(ResolverError::EmptyQuestion) => PageView {
            question: String::new(),
            answer: None,
            notice: Some(Notice::Info(user_message(&ResolverError::EmptyQuestion).into())),
            history,
        },
        Err(err) => {
            warn!(class = ?err.failure_class(), error = %err, "page question failed");
            PageView {
                question: form.question,
                answer: None,
                notice: Some(Notice::Error(user_message(&err).into())),
                history,
            }
        }
    };

    Html(render_page(variant, &view))
}

/// Parses the hidden history field; a missing or tampered value starts fresh.
fn decode_history(raw: Option<&str>) -> SessionHistory {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => SessionHistory::new(),
        Some(json) => serde_json::from_str(json).unwrap_or_else(|e| {
            warn!(error = %e, "discarding unreadable history field");
            SessionHistory::new()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_or_resets_history() {
        assert!(decode_history(None).is_empty());
        assert!(decode_history(Some("  ")).is_empty());
        assert!(decode_history(Some("{broken")).is_empty());

        let h = decode_history(Some(r#"[{"question":"q","answer":"a"}]"#));
        assert_eq!(h.len(), 1);
        assert_eq!(h.entries()[0].answer, "a");
    }
}
