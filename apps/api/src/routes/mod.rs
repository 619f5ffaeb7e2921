pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index_handler))
        .route("/healthz", get(health::health_handler))
        .route("/generate", post(handlers::handle_generate))
        .with_state(state)
}
