//! Route handlers for social post and comment generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::social::prompts::{
    compose_comment_prompt, compose_post_prompt, COMMENT_MAX_TOKENS, COMMENT_SYSTEM,
    COMMENT_TEMPERATURE, POST_MAX_TOKENS, POST_TEMPERATURE, SOCIAL_SYSTEM,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SocialPostRequest {
    pub topic: String,
    pub platform: String,
    pub writing_style: String,
    pub custom_instructions: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SocialPostResponse {
    pub result: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub content: String,
    pub platform: String,
    pub tone: String,
    pub custom_instructions: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub result: String,
}

/// POST /api/social/generate
pub async fn handle_generate_post(
    State(state): State<AppState>,
    Json(request): Json<SocialPostRequest>,
) -> Result<Json<SocialPostResponse>, AppError> {
    info!(
        "generating {} post in {} style",
        request.platform, request.writing_style
    );

    let prompt = compose_post_prompt(
        &request.topic,
        &request.platform,
        &request.writing_style,
        request.custom_instructions.as_deref(),
    );

    let result = state
        .llm
        .complete(&prompt, SOCIAL_SYSTEM, POST_MAX_TOKENS, POST_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("Post generation failed: {e}")))?;

    Ok(Json(SocialPostResponse { result }))
}

/// POST /api/comments/generate
pub async fn handle_generate_comment(
    State(state): State<AppState>,
    Json(request): Json<CommentRequest>,
) -> Result<Json<CommentResponse>, AppError> {
    info!(
        "generating {} comment for {} content",
        request.tone, request.platform
    );

    let prompt = compose_comment_prompt(
        &request.content,
        &request.platform,
        &request.tone,
        request.custom_instructions.as_deref(),
    );

    let result = state
        .llm
        .complete(&prompt, COMMENT_SYSTEM, COMMENT_MAX_TOKENS, COMMENT_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("Comment generation failed: {e}")))?;

    Ok(Json(CommentResponse { result }))
}
