use axum::{Json, extract::State};

use super::extract::AppJson;

use crate::{
    error::AppError,
    message::{RenderResponse, VisualizationRequest},
    services::visualization,
    state::SharedState,
};

pub async fn visualization_handler(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<VisualizationRequest>,
) -> Result<Json<RenderResponse>, AppError> {
    let selection = payload
        .selection
        .as_deref()
        .map(visualization::parse_selection)
        .transpose()?;

    let session_id = state.sessions.resolve(payload.session_id.as_deref()).await;

    let page = state
        .sessions
        .with_session(&session_id, |session| {
            visualization::render(&session.vehicle_data, selection.as_deref())
        })
        .await;

    Ok(Json(RenderResponse { session_id, page }))
}
