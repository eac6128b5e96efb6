// src/message.rs
use serde::{Deserialize, Serialize};

use crate::render::Page;
use crate::services::vehicle::VehicleSubmission;

#[derive(Deserialize)]
pub struct FormRequest {
    pub session_id: Option<String>,
    pub submission: Option<VehicleSubmission>,
}

#[derive(Deserialize)]
pub struct VisualizationRequest {
    pub session_id: Option<String>,
    pub selection: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub session_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct RenderResponse {
    pub session_id: String,
    pub page: Page,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub reply: Option<String>,
    pub page: Page,
}
