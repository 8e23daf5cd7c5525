//! Recommendation prompt value object

use crate::domain::preferences::{CatalogOption, PreferenceRecord};

/// Role framing for the model
const ROLE_INSTRUCTION: &str =
    "You are a knowledgeable movie recommendation expert specializing in Indian cinema.";

/// Private prioritization rules. The model must apply these silently.
const ANALYSIS_INSTRUCTION: &str = "INTERNAL ANALYSIS (Do this in your head, DO NOT write this): \
Read the Additional context and identify specific requirements. \
Prioritize: (1) Additional context specifics, (2) Language preferences, (3) Mood. \
If user mentions a favorite actor, ensure AT LEAST 2 out of 3 movies feature that actor.";

const GUIDELINES: &str = r#"Guidelines:
- Focus on Indian OTT platforms (Netflix India, Prime Video, JioCinema, SonyLIV, Sun NXT, Apple TV+, ZEE5)
- Include Indian cinema (Bollywood, Tollywood, Kollywood, etc.) and international content"#;

/// The exact per-movie layout the model is asked to copy
const OUTPUT_TEMPLATE: &str = r#"CRITICAL: Use EXACTLY this format for each movie (copy this structure):

Movie Title (Year)

**Director:** [Name]

**Cast:** [Actor 1], [Actor 2], [Actor 3]

**Platform:** [Where to watch]

**Plot:** [2-3 sentences summary]

**Why Perfect:** [Explanation]

**Runtime:** [Duration]

**Match Score:** [X/10]

---

Provide exactly 3 movie recommendations using this exact format."#;

/// Complete text prompt sent to the generation service for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationPrompt {
    content: String,
}

impl RecommendationPrompt {
    /// Assemble the prompt for a preference record.
    ///
    /// Every labeled line always carries a value: blank or empty fields are
    /// replaced by their fallback text, so the prompt keeps the same shape
    /// whatever the viewer left out.
    pub fn build(record: &PreferenceRecord) -> Self {
        let content = format!(
            "{role} {analysis} \n\nUser Input:\n\
             - Mood: {mood}\n\
             - Time available: {time}\n\
             - Watching with: {with}\n\
             - Available platforms: {platforms}\n\
             - Language preferences: {languages}\n\
             - Genre preferences: {genre}\n\
             - Things to avoid: {avoid}\n\
             - Additional context: {context}\n\n\
             {guidelines}\n\n\
             {template}",
            role = ROLE_INSTRUCTION,
            analysis = ANALYSIS_INSTRUCTION,
            mood = record.mood().label(),
            time = record.time_available().label(),
            with = record.watching_with().label(),
            platforms = record.platforms_display(),
            languages = record.languages_display(),
            genre = record.genre_display(),
            avoid = record.avoid_display(),
            context = record.context_display(),
            guidelines = GUIDELINES,
            template = OUTPUT_TEMPLATE,
        );
        Self { content }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl Default for RecommendationPrompt {
    fn default() -> Self {
        Self::build(&PreferenceRecord::default())
    }
}
