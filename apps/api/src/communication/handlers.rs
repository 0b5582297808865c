//! Route handler for workplace communication generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::communication::prompts::{
    compose_communication_prompt, COMMUNICATION_MAX_TOKENS, COMMUNICATION_SYSTEM,
    COMMUNICATION_TEMPERATURE,
};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CommunicationRequest {
    pub content_type: String,
    pub subject: String,
    pub details: Option<String>,
    pub tone: String,
    pub style: String,
    pub additional_info: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CommunicationResponse {
    pub result: String,
}

/// POST /api/communication/generate
pub async fn handle_generate_communication(
    State(state): State<AppState>,
    Json(request): Json<CommunicationRequest>,
) -> Result<Json<CommunicationResponse>, AppError> {
    info!("generating {} content", request.content_type);

    let prompt = compose_communication_prompt(
        &request.content_type,
        &request.subject,
        request.details.as_deref(),
        &request.tone,
        &request.style,
        request.additional_info.as_deref(),
    );

    let result = state
        .llm
        .complete(
            &prompt,
            COMMUNICATION_SYSTEM,
            COMMUNICATION_MAX_TOKENS,
            COMMUNICATION_TEMPERATURE,
        )
        .await
        .map_err(|e| AppError::Llm(format!("Communication generation failed: {e}")))?;

    Ok(Json(CommunicationResponse { result }))
}
