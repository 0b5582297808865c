// Workplace communication content: meeting agendas, meeting descriptions,
// and Slack messages.

pub mod handlers;
pub mod prompts;
