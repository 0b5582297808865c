//! Prompt tables and composition for workplace communication content.

pub const COMMUNICATION_SYSTEM: &str =
    "You are an expert at creating professional workplace communication.";

pub const COMMUNICATION_MAX_TOKENS: u32 = 800;
pub const COMMUNICATION_TEMPERATURE: f32 = 0.7;

/// Content-type guide. Unrecognized types fall back to generic professional
/// content.
fn content_type_guide(content_type: &str) -> &'static str {
    match content_type {
        "meeting-agenda" => "structured meeting agenda",
        "meeting-description" => "clear and informative meeting description",
        "slack-message" => "well-crafted Slack message",
        _ => "professional communication content",
    }
}

/// Type-specific instruction appended after the body of the prompt.
fn content_type_instruction(content_type: &str) -> &'static str {
    match content_type {
        "meeting-agenda" => {
            "Format the agenda as a numbered list of discussion topics with a suggested time allocation for each item."
        }
        "meeting-description" => {
            "Keep the description focused on the meeting's purpose, expected outcomes, and who should attend."
        }
        "slack-message" => {
            "Keep the message concise and easy to scan, with short paragraphs suitable for Slack."
        }
        _ => "Ensure the content is clear, complete, and ready to use.",
    }
}

/// Tone guide. Unrecognized tones fall back to appropriate professional
/// language.
fn tone_guide(tone: &str) -> &'static str {
    match tone {
        "professional" => "a formal, business-appropriate tone",
        "casual" => "a relaxed, conversational tone",
        "friendly" => "a warm, approachable tone",
        "urgent" => "a tone that conveys urgency and the need for prompt action",
        "informative" => "a clear, fact-focused tone",
        "collaborative" => "an inclusive tone that invites input",
        _ => "appropriate professional language",
    }
}

/// Style guide. Unrecognized styles fall back to clear formatting.
fn style_guide(style: &str) -> &'static str {
    match style {
        "concise" => "keeping it brief and to the point",
        "detailed" => "with thorough, comprehensive detail",
        "bullet-points" => "formatted as clear bullet points",
        "structured" => "with well-organized sections and headings",
        "action-oriented" => "focused on clear action items and next steps",
        _ => "with clear formatting",
    }
}

/// Builds the communication prompt from the three tables, the caller's
/// subject and optional details, and the type-specific trailing instruction.
/// Optional fields are appended only when non-empty.
pub fn compose_communication_prompt(
    content_type: &str,
    subject: &str,
    details: Option<&str>,
    tone: &str,
    style: &str,
    additional_info: Option<&str>,
) -> String {
    let mut prompt = format!(
        "Create a {} using {}, {}.\n\nSubject: {}",
        content_type_guide(content_type),
        tone_guide(tone),
        style_guide(style),
        subject
    );

    if let Some(details) = details.filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("\nDetails: {details}"));
    }

    prompt.push_str(&format!("\n\n{}", content_type_instruction(content_type)));

    if let Some(info) = additional_info.filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("\n\nAdditional information: {info}"));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agenda_prompt_combines_all_three_tables() {
        let prompt = compose_communication_prompt(
            "meeting-agenda",
            "Q3 planning",
            Some("Five engineers, one hour"),
            "collaborative",
            "structured",
            None,
        );
        assert_eq!(
            prompt,
            "Create a structured meeting agenda using an inclusive tone that invites input, \
             with well-organized sections and headings.\n\n\
             Subject: Q3 planning\n\
             Details: Five engineers, one hour\n\n\
             Format the agenda as a numbered list of discussion topics with a suggested time \
             allocation for each item."
        );
    }

    #[test]
    fn test_slack_message_gets_slack_instruction() {
        let prompt =
            compose_communication_prompt("slack-message", "Deploy window", None, "urgent", "concise", None);
        assert!(prompt.starts_with("Create a well-crafted Slack message"));
        assert!(prompt.contains("conveys urgency"));
        assert!(prompt.contains("concise and easy to scan"));
    }

    #[test]
    fn test_unknown_values_fall_back_to_defaults() {
        let prompt = compose_communication_prompt("memo", "S", None, "snarky", "baroque", None);
        assert!(prompt.starts_with(
            "Create a professional communication content using appropriate professional \
             language, with clear formatting."
        ));
        assert!(prompt.ends_with("Ensure the content is clear, complete, and ready to use."));
    }

    #[test]
    fn test_empty_optional_fields_ignored() {
        let with_empty = compose_communication_prompt(
            "meeting-description",
            "Sync",
            Some(""),
            "friendly",
            "detailed",
            Some(""),
        );
        let without =
            compose_communication_prompt("meeting-description", "Sync", None, "friendly", "detailed", None);
        assert_eq!(with_empty, without);
        assert!(!with_empty.contains("Details:"));
        assert!(!with_empty.contains("Additional information:"));
    }

    #[test]
    fn test_additional_info_appended_last() {
        let prompt = compose_communication_prompt(
            "meeting-agenda",
            "Retro",
            None,
            "casual",
            "bullet-points",
            Some("Team is remote."),
        );
        assert!(prompt.ends_with("\n\nAdditional information: Team is remote."));
    }
}
