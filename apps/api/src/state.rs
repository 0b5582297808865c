use crate::jira::client::JiraClient;
use crate::llm_client::LlmClient;
use crate::youtube::YoutubeClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Each client wraps a `reqwest::Client`, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub youtube: YoutubeClient,
    pub jira: JiraClient,
}
