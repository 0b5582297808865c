// Jira tooling: AI-drafted ticket content plus issue creation against the
// Jira REST API with caller-supplied credentials.

pub mod client;
pub mod handlers;
pub mod prompts;
