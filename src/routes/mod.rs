// src/routes/mod.rs
pub mod chat;
pub mod extract;
pub mod form;
pub mod sessions;
pub mod visualization;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{delete, get, post},
};
use chat::chat_handler;
use form::form_handler;
use sessions::end_session_handler;
use tower_http::trace::TraceLayer;
use visualization::visualization_handler;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/form", post(form_handler))
        .route("/visualization", post(visualization_handler))
        .route("/chat", post(chat_handler))
        .route("/sessions/{id}", delete(end_session_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
