pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::localize::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Bare string table, transformed with the configured defaults
        .route("/api/v1/translate", post(handlers::handle_translate))
        // Structured request with explicit language and category
        .route("/api/v1/localize", post(handlers::handle_localize))
        .with_state(state)
}
