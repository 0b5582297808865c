//! Jira REST adapter. Credentials arrive with each request and are never
//! stored server-side.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::info;

use crate::jira::prompts::issue_type_name;

#[derive(Debug, Error)]
pub enum JiraError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Jira API returned status {status}: {body}")]
    Api { status: u16, body: String },
}

/// Connection settings supplied by the caller on every create request.
#[derive(Debug, Clone, Deserialize)]
pub struct JiraSettings {
    pub jira_url: String,
    pub username: String,
    pub api_token: String,
    pub project_key: String,
}

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    key: String,
}

#[derive(Clone)]
pub struct JiraClient {
    client: Client,
}

impl JiraClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Creates an issue and returns its browse URL. Jira answers issue
    /// creation with exactly 201; any other status fails with the status and
    /// the response body so the caller sees Jira's own explanation.
    pub async fn create_issue(
        &self,
        settings: &JiraSettings,
        summary: &str,
        description: &str,
        ticket_type: &str,
        priority: &str,
    ) -> Result<String, JiraError> {
        let auth = STANDARD.encode(format!("{}:{}", settings.username, settings.api_token));

        let payload = json!({
            "fields": {
                "project": {"key": settings.project_key},
                "summary": summary,
                "description": description,
                "issuetype": {"name": issue_type_name(ticket_type)},
                "priority": {"name": priority},
            }
        });

        let response = self
            .client
            .post(format!("{}/rest/api/3/issue", settings.jira_url))
            .header("Authorization", format!("Basic {auth}"))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() != 201 {
            let body = response.text().await.unwrap_or_default();
            return Err(JiraError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let created: CreatedIssue = response.json().await?;

        info!(
            "created Jira issue {} in project {}",
            created.key, settings.project_key
        );

        Ok(format!("{}/browse/{}", settings.jira_url, created.key))
    }
}

impl Default for JiraClient {
    fn default() -> Self {
        Self::new()
    }
}
