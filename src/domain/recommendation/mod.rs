//! Recommendation domain module

mod formatter;
mod prompt;

pub use formatter::{format_response, is_title_line, HEADING_MARKER, MAX_TITLE_CHARS};
pub use prompt::RecommendationPrompt;
