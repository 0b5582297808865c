// Social content: platform-tailored posts and comments on existing content.

pub mod handlers;
pub mod prompts;
