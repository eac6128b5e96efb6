use axum::{Json, extract::State};

use super::extract::AppJson;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let session_id = state.sessions.resolve(payload.session_id.as_deref()).await;

    let (page, reply) = state
        .sessions
        .with_session(&session_id, |session| {
            chatbot::render(session, payload.message.as_deref())
        })
        .await;

    Ok(Json(ChatResponse {
        session_id,
        reply: reply.map(str::to_string),
        page,
    }))
}
