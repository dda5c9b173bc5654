use ai_llm_service::FailureClass;
use answer_resolver::ResolverError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::core::http::response_envelope::ApiResponse;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    /// Rich HTTP error mapped from lower layers with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Http { status, .. } => *status,
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::Http { code, .. } => code,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        ApiResponse::<()>::error(self.error_code(), self.to_string(), Vec::new())
            .into_response_with_status(status)
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Text shown to users when a question could not be answered.
pub fn user_message(err: &ResolverError) -> &'static str {
    match err {
        ResolverError::EmptyQuestion => "Please enter a question.",
        ResolverError::Remote(e) => match e.failure_class() {
            FailureClass::Transient => {
                "The assistant is temporarily unavailable. Please try again in a moment."
            }
            FailureClass::Authentication => {
                "The assistant is not configured correctly right now. Please contact support."
            }
            FailureClass::Upstream => {
                "Sorry, something went wrong while generating an answer. Please try again."
            }
        },
        _ => "Sorry, the answer table is unavailable.",
    }
}

/// Maps resolver failures to precise HTTP status & code.
impl From<ResolverError> for AppError {
    fn from(err: ResolverError) -> Self {
        let message = user_message(&err).to_string();
        let (status, code) = match &err {
            ResolverError::EmptyQuestion => (StatusCode::BAD_REQUEST, "EMPTY_QUESTION"),
            ResolverError::Remote(e) => match e.failure_class() {
                FailureClass::Transient => {
                    (StatusCode::SERVICE_UNAVAILABLE, "UPSTREAM_UNAVAILABLE")
                }
                FailureClass::Authentication => (StatusCode::BAD_GATEWAY, "UPSTREAM_AUTH_FAILED"),
                FailureClass::Upstream => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            },
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "ANSWER_TABLE_ERROR"),
        };
        AppError::Http {
            status,
            code,
            message,
        }
    }
}
