pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/ml/analyze", post(handlers::handle_analyze))
        .route(
            "/api/ml/analyze/upload",
            post(handlers::handle_analyze_upload),
        )
        .route("/api/ml/classify", post(handlers::handle_classify))
        .route("/api/ml/extract", post(handlers::handle_extract))
        .route(
            "/api/ml/recommendations",
            post(handlers::handle_recommendations),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
