pub mod core;
pub mod error_handler;
mod middleware_layer;
mod routes;
pub mod ui;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{
    core::app_state::AppState,
    error_handler::AppError,
    middleware_layer::json_extractor::json_error_mapper,
    routes::{
        ask::ask_question_route::ask_question,
        health_route::health,
        page::page_route::{show_page, submit_page},
    },
};

/// Builds the full application router.
///
/// - `GET /` and `POST /` serve the widget page
/// - `POST /api/ask` answers JSON clients
/// - `GET /health` reports table size, variant and upstream reachability
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/ask", post(ask_question))
        .layer(middleware::from_fn(json_error_mapper));

    Router::new()
        .route("/", get(show_page).post(submit_page))
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `state.config.api_address` and serves until Ctrl+C.
pub async fn start(state: AppState) -> Result<(), AppError> {
    let addr = state.config.api_address.clone();
    let variant = state.config.variant;
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::Bind)?;

    info!(%addr, %variant, "support agent listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            error!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
