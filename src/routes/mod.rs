// src/routes/mod.rs
pub mod chat;
pub mod health;

use crate::state::SharedState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use chat::chat_handler;
use health::{health_handler, info_handler};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Largest `/chat` body accepted; axum's own default is 2 MiB.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn create_router() -> Router<SharedState> {
    router_with_body_limit(MAX_BODY_BYTES)
}

pub fn router_with_body_limit(limit: usize) -> Router<SharedState> {
    Router::new()
        .route("/", get(info_handler))
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .layer(DefaultBodyLimit::max(limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
