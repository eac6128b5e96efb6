use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{error::AppError, state::SharedState};

pub async fn end_session_handler(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove_session(&session_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("unknown session {session_id}")))
    }
}
