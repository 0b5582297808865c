//! Route handlers for ticket drafting and creation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::jira::client::JiraSettings;
use crate::jira::prompts::{
    compose_ticket_prompt, TICKET_MAX_TOKENS, TICKET_SYSTEM, TICKET_TEMPERATURE,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TicketRequest {
    pub subject: String,
    pub rough_description: String,
    pub ticket_type: String,
    #[serde(default = "default_priority")]
    pub priority: String,
}

#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub result: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    pub subject: String,
    pub content: String,
    pub ticket_type: String,
    pub priority: String,
    pub jira_settings: JiraSettings,
}

#[derive(Debug, Serialize)]
pub struct CreateTicketResponse {
    pub ticket_url: String,
    pub message: String,
}

fn default_priority() -> String {
    "Medium".to_string()
}

/// POST /api/jira/generate
///
/// Drafts complete ticket content from a subject and a rough description.
pub async fn handle_generate_ticket(
    State(state): State<AppState>,
    Json(request): Json<TicketRequest>,
) -> Result<Json<TicketResponse>, AppError> {
    info!("drafting {} ticket content", request.ticket_type);

    let prompt = compose_ticket_prompt(
        &request.subject,
        &request.rough_description,
        &request.ticket_type,
        &request.priority,
    );

    let result = state
        .llm
        .complete(&prompt, TICKET_SYSTEM, TICKET_MAX_TOKENS, TICKET_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("Ticket generation failed: {e}")))?;

    Ok(Json(TicketResponse { result }))
}

/// POST /api/jira/create
///
/// Creates the ticket in Jira with the caller's credentials and returns the
/// browse URL of the new issue.
pub async fn handle_create_ticket(
    State(state): State<AppState>,
    Json(request): Json<CreateTicketRequest>,
) -> Result<Json<CreateTicketResponse>, AppError> {
    info!(
        "creating {} ticket in project {}",
        request.ticket_type, request.jira_settings.project_key
    );

    let ticket_url = state
        .jira
        .create_issue(
            &request.jira_settings,
            &request.subject,
            &request.content,
            &request.ticket_type,
            &request.priority,
        )
        .await
        .map_err(|e| AppError::Jira(format!("Failed to create Jira ticket: {e}")))?;

    Ok(Json(CreateTicketResponse {
        ticket_url,
        message: "Jira ticket created successfully".to_string(),
    }))
}
