// Transcript-derived content: YouTube video summarization and analysis of
// caller-supplied transcripts share one prompt recipe.

pub mod handlers;
pub mod prompts;
