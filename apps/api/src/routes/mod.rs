pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::communication::handlers as communication;
use crate::jira::handlers as jira;
use crate::social::handlers as social;
use crate::state::AppState;
use crate::transcripts::handlers as transcripts;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Transcript-derived content
        .route(
            "/api/youtube/summarize",
            post(transcripts::handle_summarize_youtube),
        )
        .route(
            "/api/transcript/analyze",
            post(transcripts::handle_analyze_transcript),
        )
        // Social content
        .route("/api/social/generate", post(social::handle_generate_post))
        .route(
            "/api/comments/generate",
            post(social::handle_generate_comment),
        )
        // Jira tooling
        .route("/api/jira/generate", post(jira::handle_generate_ticket))
        .route("/api/jira/create", post(jira::handle_create_ticket))
        // Workplace communication
        .route(
            "/api/communication/generate",
            post(communication::handle_generate_communication),
        )
        .with_state(state)
}
