//! Recommend movies use case

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::preferences::PreferenceRecord;
use crate::domain::recommendation::{format_response, RecommendationPrompt};

use super::ports::{GenerationError, TextGenerator};

/// Errors from the recommend use case
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Missing API key. Set GEMINI_API_KEY (or GOOGLE_API_KEY) or configure via 'watch-tonight config set api_key <key>'")]
    MissingApiKey,
}

/// Output from the recommend use case
#[derive(Debug, Clone)]
pub struct RecommendOutput {
    /// The prompt that was sent
    pub prompt: RecommendationPrompt,
    /// Text exactly as returned by the generator
    pub raw: String,
    /// Raw text with title lines promoted to headings
    pub formatted: String,
}

/// Callbacks for status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct RecommendCallbacks {
    /// Called right before the generation request
    pub on_generating_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called once the generation request succeeded
    pub on_generating_end: Option<Box<dyn Fn() + Send + Sync>>,
}

/// One request: build the prompt, generate once, format the answer
pub struct RecommendMoviesUseCase<G>
where
    G: TextGenerator,
{
    generator: G,
}

impl<G> RecommendMoviesUseCase<G>
where
    G: TextGenerator,
{
    /// Create a new use case instance
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Execute the recommendation workflow
    pub async fn execute(
        &self,
        record: &PreferenceRecord,
        callbacks: RecommendCallbacks,
    ) -> Result<RecommendOutput, RecommendError> {
        let prompt = RecommendationPrompt::build(record);
        debug!(
            mood = %record.mood(),
            prompt_chars = prompt.content().chars().count(),
            "built recommendation prompt"
        );

        if let Some(ref cb) = callbacks.on_generating_start {
            cb();
        }

        let raw = self.generator.generate(&prompt).await?;
        info!(response_chars = raw.chars().count(), "received recommendations");

        if let Some(ref cb) = callbacks.on_generating_end {
            cb();
        }

        let formatted = format_response(&raw);

        Ok(RecommendOutput {
            prompt,
            raw,
            formatted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::domain::preferences::{Mood, Platform};

    // Mock implementations for testing
    struct MockGenerator {
        reply: Result<String, GenerationError>,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl MockGenerator {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing(error: GenerationError) -> Self {
            Self {
                reply: Err(error),
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate(
            &self,
            prompt: &RecommendationPrompt,
        ) -> Result<String, GenerationError> {
            self.seen.lock().unwrap().push(prompt.content().to_string());
            self.reply.clone()
        }
    }

    #[tokio::test]
    async fn execute_formats_generated_text() {
        let use_case =
            RecommendMoviesUseCase::new(MockGenerator::replying("Jawan (2023)\n\n**Director:** Atlee"));

        let output = use_case
            .execute(&PreferenceRecord::default(), RecommendCallbacks::default())
            .await
            .unwrap();

        assert_eq!(output.raw, "Jawan (2023)\n\n**Director:** Atlee");
        assert_eq!(output.formatted, "### Jawan (2023)\n\n**Director:** Atlee");
    }

    #[tokio::test]
    async fn execute_sends_prompt_built_from_record() {
        let generator = MockGenerator::replying("ok");
        let seen = Arc::clone(&generator.seen);
        let use_case = RecommendMoviesUseCase::new(generator);

        let record = PreferenceRecord::builder()
            .mood(Mood::Adventurous)
            .platforms([Platform::SunNxt])
            .build();

        let output = use_case
            .execute(&record, RecommendCallbacks::default())
            .await
            .unwrap();

        let prompts = seen.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], output.prompt.content());
        assert!(prompts[0].contains("- Mood: Adventurous"));
        assert!(prompts[0].contains("- Available platforms: Sun NXT"));
    }

    #[tokio::test]
    async fn execute_propagates_generation_failure() {
        let use_case = RecommendMoviesUseCase::new(MockGenerator::failing(
            GenerationError::InvalidApiKey,
        ));

        let err = use_case
            .execute(&PreferenceRecord::default(), RecommendCallbacks::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RecommendError::Generation(GenerationError::InvalidApiKey)
        ));
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[tokio::test]
    async fn callbacks_fire_around_generation() {
        let started = Arc::new(AtomicUsize::new(0));
        let finished = Arc::new(AtomicUsize::new(0));
        let (s, f) = (Arc::clone(&started), Arc::clone(&finished));

        let callbacks = RecommendCallbacks {
            on_generating_start: Some(Box::new(move || {
                s.fetch_add(1, Ordering::SeqCst);
            })),
            on_generating_end: Some(Box::new(move || {
                f.fetch_add(1, Ordering::SeqCst);
            })),
        };

        let use_case = RecommendMoviesUseCase::new(MockGenerator::replying("text"));
        use_case
            .execute(&PreferenceRecord::default(), callbacks)
            .await
            .unwrap();

        assert_eq!(started.load(Ordering::SeqCst), 1);
        assert_eq!(finished.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn end_callback_skipped_on_failure() {
        let finished = Arc::new(AtomicUsize::new(0));
        let f = Arc::clone(&finished);
        let callbacks = RecommendCallbacks {
            on_generating_end: Some(Box::new(move || {
                f.fetch_add(1, Ordering::SeqCst);
            })),
            ..Default::default()
        };

        let use_case =
            RecommendMoviesUseCase::new(MockGenerator::failing(GenerationError::RateLimited));
        assert!(use_case
            .execute(&PreferenceRecord::default(), callbacks)
            .await
            .is_err());
        assert_eq!(finished.load(Ordering::SeqCst), 0);
    }
}
