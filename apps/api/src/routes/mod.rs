pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::format::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resume/format",
            post(handlers::handle_format_resume),
        )
        .route(
            "/api/v1/resume/preview",
            post(handlers::handle_preview_resume),
        )
        .with_state(state)
}
