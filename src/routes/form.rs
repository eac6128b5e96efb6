use axum::{Json, extract::State};

use super::extract::AppJson;

use crate::{
    error::AppError,
    message::{FormRequest, RenderResponse},
    services::{intake, vehicle::today},
    state::SharedState,
};

pub async fn form_handler(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<FormRequest>,
) -> Result<Json<RenderResponse>, AppError> {
    let session_id = state.sessions.resolve(payload.session_id.as_deref()).await;
    let today = today();

    let page = state
        .sessions
        .with_session(&session_id, |session| {
            intake::render(session, payload.submission, today)
        })
        .await?;

    Ok(Json(RenderResponse { session_id, page }))
}
