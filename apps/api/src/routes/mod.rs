pub mod health;
pub mod rankings;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/rankings", post(rankings::handle_rank))
        .route("/api/v1/rankings/export", post(rankings::handle_export))
        .layer(body_limit)
        .with_state(state)
}
