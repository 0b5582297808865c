//! Prompt construction for transcript-derived content.
//!
//! One recipe serves both the YouTube summarization endpoint and the raw
//! transcript analysis endpoint; only the title differs.

/// System role for all transcript-derived completion calls.
pub const TRANSCRIPT_SYSTEM: &str = "You are an expert at analyzing and summarizing content.";

pub const TRANSCRIPT_MAX_TOKENS: u32 = 1000;
pub const TRANSCRIPT_TEMPERATURE: f32 = 0.7;

/// Title used when the caller supplies a transcript without a video.
pub const CUSTOM_TRANSCRIPT_TITLE: &str = "Custom Transcript";

/// Transcripts longer than this are cut to their first 4000 characters
/// before embedding. Counted in characters, not tokens; keeps long
/// transcripts inside the completion window.
const MAX_TRANSCRIPT_CHARS: usize = 4000;

/// Builds the prompt for the requested output type. Unrecognized output
/// types fall back to a general analysis prompt. The `custom` type leads
/// with the caller's own prompt when one is supplied and falls back like an
/// unrecognized type when it is missing or empty.
pub fn compose_transcript_prompt(
    transcript: &str,
    output_type: &str,
    title: &str,
    custom_prompt: Option<&str>,
) -> String {
    let transcript = truncate_chars(transcript, MAX_TRANSCRIPT_CHARS);

    match output_type {
        "summary" => format!(
            "Summarize the main points of this YouTube video titled '{title}'. Transcript:\n\n{transcript}"
        ),
        "notes" => format!(
            "Create detailed notes in bullet point format from this YouTube video titled '{title}'. Transcript:\n\n{transcript}"
        ),
        "explanation" => format!(
            "Explain the content of this YouTube video titled '{title}' in simple terms that are easy to understand. Transcript:\n\n{transcript}"
        ),
        "questions" => format!(
            "Generate important questions and answers based on the content of this YouTube video titled '{title}'. Transcript:\n\n{transcript}"
        ),
        "custom" => match custom_prompt.filter(|prompt| !prompt.is_empty()) {
            Some(custom) => format!(
                "{custom}\n\nVideo Title: '{title}'\nTranscript:\n\n{transcript}"
            ),
            None => general_analysis_prompt(title, transcript),
        },
        _ => general_analysis_prompt(title, transcript),
    }
}

fn general_analysis_prompt(title: &str, transcript: &str) -> String {
    format!(
        "Analyze the content of this YouTube video titled '{title}'. Transcript:\n\n{transcript}"
    )
}

/// Cuts `text` to its first `max_chars` characters. Operates on char
/// boundaries, so multi-byte text never splits mid-character.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_embeds_title_and_transcript() {
        let prompt = compose_transcript_prompt("hello world", "summary", "My Video", None);
        assert_eq!(
            prompt,
            "Summarize the main points of this YouTube video titled 'My Video'. Transcript:\n\nhello world"
        );
    }

    #[test]
    fn test_notes_prompt_asks_for_bullet_points() {
        let prompt = compose_transcript_prompt("hello", "notes", "My Video", None);
        assert!(prompt.starts_with("Create detailed notes in bullet point format"));
    }

    #[test]
    fn test_unknown_output_type_falls_back_to_analysis() {
        let prompt = compose_transcript_prompt("hello", "poem", "My Video", None);
        assert!(prompt.starts_with("Analyze the content of this YouTube video"));
        assert!(prompt.contains("'My Video'"));
    }

    #[test]
    fn test_custom_prompt_leads_the_composed_prompt() {
        let prompt = compose_transcript_prompt(
            "hello",
            "custom",
            "My Video",
            Some("List every name mentioned."),
        );
        assert_eq!(
            prompt,
            "List every name mentioned.\n\nVideo Title: 'My Video'\nTranscript:\n\nhello"
        );
    }

    #[test]
    fn test_custom_without_prompt_falls_back_to_analysis() {
        let missing = compose_transcript_prompt("hello", "custom", "My Video", None);
        let empty = compose_transcript_prompt("hello", "custom", "My Video", Some(""));
        assert!(missing.starts_with("Analyze the content"));
        assert_eq!(missing, empty);
    }

    #[test]
    fn test_transcript_truncated_to_char_limit() {
        let transcript = "a".repeat(MAX_TRANSCRIPT_CHARS + 500);
        let prompt = compose_transcript_prompt(&transcript, "summary", "T", None);
        let embedded = prompt.split("Transcript:\n\n").nth(1).unwrap();
        assert_eq!(embedded.chars().count(), MAX_TRANSCRIPT_CHARS);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        // Four bytes per char in UTF-8; byte-based slicing would panic or
        // split a character.
        let transcript = "𝄞".repeat(MAX_TRANSCRIPT_CHARS + 10);
        let prompt = compose_transcript_prompt(&transcript, "summary", "T", None);
        let embedded = prompt.split("Transcript:\n\n").nth(1).unwrap();
        assert_eq!(embedded.chars().count(), MAX_TRANSCRIPT_CHARS);
    }

    #[test]
    fn test_short_transcript_kept_whole() {
        let prompt = compose_transcript_prompt("short text", "summary", "T", None);
        assert!(prompt.ends_with("short text"));
    }

    #[test]
    fn test_composition_is_deterministic() {
        let a = compose_transcript_prompt("same input", "questions", "T", None);
        let b = compose_transcript_prompt("same input", "questions", "T", None);
        assert_eq!(a, b);
    }
}
