//! Prompt tables and composition for social posts and comments.

pub const SOCIAL_SYSTEM: &str = "You are an expert at creating engaging social media content.";
pub const COMMENT_SYSTEM: &str = "You are an expert at creating engaging and authentic comments.";

pub const POST_MAX_TOKENS: u32 = 800;
pub const POST_TEMPERATURE: f32 = 0.8;

pub const COMMENT_MAX_TOKENS: u32 = 300;
pub const COMMENT_TEMPERATURE: f32 = 0.7;

/// Platform-specific content guide. Unrecognized platforms fall back to the
/// LinkedIn guide.
fn platform_guide(platform: &str) -> &'static str {
    match platform {
        "twitter" => "concise tweet for X (Twitter) within 280 characters, with relevant hashtags",
        "youtube" => "engaging community post for YouTube that encourages interaction",
        "instagram" => "visually descriptive caption for Instagram with appropriate emojis and hashtags",
        _ => "professional post for LinkedIn that includes bullet points, some emojis, and relevant hashtags",
    }
}

/// Writing-style guide. Unrecognized styles fall back to the professional
/// tone.
fn style_guide(writing_style: &str) -> &'static str {
    match writing_style {
        "casual" => "in a friendly, conversational approach",
        "inspirational" => "in a motivational and uplifting style",
        "educational" => "in an informative and teaching-focused manner",
        "humorous" => "with light-hearted appropriate humor",
        "thought-provoking" => "that encourages discussion and reflection",
        _ => "in a formal, business-oriented tone",
    }
}

/// Builds the post prompt from the platform and style tables. Custom
/// instructions are appended only when non-empty.
pub fn compose_post_prompt(
    topic: &str,
    platform: &str,
    writing_style: &str,
    custom_instructions: Option<&str>,
) -> String {
    let mut prompt = format!(
        "Create a {} {} about the topic: {}.",
        platform_guide(platform),
        style_guide(writing_style),
        topic
    );

    if let Some(instructions) = custom_instructions.filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("\n\nAdditional instructions: {instructions}"));
    }

    prompt
}

/// Builds the comment prompt. Tone and platform are interpolated as given;
/// there is no table behind them.
pub fn compose_comment_prompt(
    content: &str,
    platform: &str,
    tone: &str,
    custom_instructions: Option<&str>,
) -> String {
    let mut prompt = format!(
        "Generate a thoughtful {tone} comment for the following {platform} content:\n\n{content}"
    );

    if let Some(instructions) = custom_instructions.filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("\n\nAdditional instructions: {instructions}"));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_prompt_combines_platform_and_style() {
        let prompt = compose_post_prompt("rust lifetimes", "twitter", "educational", None);
        assert_eq!(
            prompt,
            "Create a concise tweet for X (Twitter) within 280 characters, with relevant hashtags \
             in an informative and teaching-focused manner about the topic: rust lifetimes."
        );
    }

    #[test]
    fn test_unknown_platform_falls_back_to_linkedin() {
        let prompt = compose_post_prompt("topic", "myspace", "professional", None);
        assert!(prompt.contains("professional post for LinkedIn"));
    }

    #[test]
    fn test_unknown_style_falls_back_to_professional() {
        let prompt = compose_post_prompt("topic", "linkedin", "sarcastic", None);
        assert!(prompt.contains("in a formal, business-oriented tone"));
    }

    #[test]
    fn test_custom_instructions_appended_when_present() {
        let prompt = compose_post_prompt("topic", "twitter", "casual", Some("Mention our beta."));
        assert!(prompt.ends_with("\n\nAdditional instructions: Mention our beta."));
    }

    #[test]
    fn test_empty_custom_instructions_ignored() {
        let with_empty = compose_post_prompt("topic", "twitter", "casual", Some(""));
        let without = compose_post_prompt("topic", "twitter", "casual", None);
        assert_eq!(with_empty, without);
        assert!(!with_empty.contains("Additional instructions"));
    }

    #[test]
    fn test_comment_prompt_uses_tone_and_platform_verbatim() {
        let prompt = compose_comment_prompt("Great launch post!", "linkedin", "supportive", None);
        assert_eq!(
            prompt,
            "Generate a thoughtful supportive comment for the following linkedin content:\n\nGreat launch post!"
        );
    }

    #[test]
    fn test_comment_custom_instructions_appended() {
        let prompt = compose_comment_prompt("content", "x", "witty", Some("Keep it short."));
        assert!(prompt.ends_with("\n\nAdditional instructions: Keep it short."));
    }
}
