//! Prompt table and composition for ticket drafting, plus the mapping from
//! ticket types to the issue-type names Jira expects.

pub const TICKET_SYSTEM: &str = "You are an expert at writing clear, well-structured Jira tickets.";

pub const TICKET_MAX_TOKENS: u32 = 1200;
pub const TICKET_TEMPERATURE: f32 = 0.7;

/// Ticket-type content guide. Unrecognized types fall back to the task
/// guide.
fn ticket_guide(ticket_type: &str) -> &'static str {
    match ticket_type {
        "epic" => "comprehensive epic description covering the overall goal, scope, and the work it groups together",
        "story" => "user story describing who needs what and the business value it delivers",
        "bug" => "bug report with clear reproduction steps and expected versus actual behavior",
        "improvement" => "improvement proposal describing the current behavior and the desired change",
        "feature" => "new feature request with well-defined requirements",
        _ => "technical task with concrete implementation details",
    }
}

/// Maps a ticket type to the issue-type name the Jira API expects.
/// Unrecognized types map to "Task".
pub fn issue_type_name(ticket_type: &str) -> &'static str {
    match ticket_type {
        "epic" => "Epic",
        "story" => "Story",
        "bug" => "Bug",
        "improvement" => "Improvement",
        "feature" => "New Feature",
        _ => "Task",
    }
}

/// Builds the drafting prompt: the type guide, the caller's fields, and a
/// fixed checklist of sections the finished ticket should contain.
pub fn compose_ticket_prompt(
    subject: &str,
    rough_description: &str,
    ticket_type: &str,
    priority: &str,
) -> String {
    format!(
        "Create a detailed {} based on the following information.\n\n\
         Subject: {subject}\n\
         Priority: {priority}\n\
         Rough Description: {rough_description}\n\n\
         Include the following sections where applicable:\n\
         - Description/Summary\n\
         - Acceptance Criteria\n\
         - Steps to Reproduce\n\
         - Requirements\n\
         - Notes",
        ticket_guide(ticket_type)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bug_prompt_asks_for_reproduction_steps() {
        let prompt = compose_ticket_prompt("Login crash", "App dies on submit", "bug", "High");
        assert!(prompt.starts_with("Create a detailed bug report with clear reproduction steps"));
        assert!(prompt.contains("Subject: Login crash"));
        assert!(prompt.contains("Priority: High"));
        assert!(prompt.contains("Rough Description: App dies on submit"));
    }

    #[test]
    fn test_prompt_lists_expected_sections() {
        let prompt = compose_ticket_prompt("S", "D", "story", "Medium");
        assert!(prompt.contains("- Acceptance Criteria"));
        assert!(prompt.contains("- Steps to Reproduce"));
        assert!(prompt.contains("- Notes"));
    }

    #[test]
    fn test_unknown_ticket_type_drafts_a_task() {
        let prompt = compose_ticket_prompt("S", "D", "banana", "Low");
        assert!(prompt.contains("technical task with concrete implementation details"));
    }

    #[test]
    fn test_issue_type_names() {
        assert_eq!(issue_type_name("epic"), "Epic");
        assert_eq!(issue_type_name("story"), "Story");
        assert_eq!(issue_type_name("bug"), "Bug");
        assert_eq!(issue_type_name("improvement"), "Improvement");
        assert_eq!(issue_type_name("feature"), "New Feature");
        assert_eq!(issue_type_name("task"), "Task");
        assert_eq!(issue_type_name("banana"), "Task");
    }
}
