//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidOptionError;
use crate::domain::preferences::{
    CatalogOption, Language, Mood, Platform, PreferenceRecord, TimeAvailable, WatchingWith,
    DEFAULT_LANGUAGES,
};

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-flash-latest";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub mood: Option<String>,
    pub time: Option<String>,
    pub watching_with: Option<String>,
    pub platforms: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
}

/// Free-text answers, which only ever come from the command line
#[derive(Debug, Clone, Default)]
pub struct FreeText {
    pub genre_preferences: Option<String>,
    pub avoid: Option<String>,
    pub additional_context: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some(DEFAULT_MODEL.to_string()),
            mood: Some(Mood::default().as_str().to_string()),
            time: Some(TimeAvailable::default().as_str().to_string()),
            watching_with: Some(WatchingWith::default().as_str().to_string()),
            platforms: Some(Vec::new()),
            languages: Some(
                DEFAULT_LANGUAGES
                    .iter()
                    .map(|l| l.as_str().to_string())
                    .collect(),
            ),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            mood: other.mood.or(self.mood),
            time: other.time.or(self.time),
            watching_with: other.watching_with.or(self.watching_with),
            platforms: other.platforms.or(self.platforms),
            languages: other.languages.or(self.languages),
        }
    }

    /// Get the model name, or the default if not set
    pub fn model_or_default(&self) -> &str {
        self.model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODEL)
    }

    /// Build the preference record for one request.
    ///
    /// Unset catalog fields fall back to the form defaults; set values
    /// must parse, so a typo is reported rather than silently ignored.
    pub fn preference_record(&self, text: FreeText) -> Result<PreferenceRecord, InvalidOptionError> {
        let mut builder = PreferenceRecord::builder();

        if let Some(mood) = &self.mood {
            builder = builder.mood(mood.parse::<Mood>()?);
        }
        if let Some(time) = &self.time {
            builder = builder.time_available(time.parse::<TimeAvailable>()?);
        }
        if let Some(with) = &self.watching_with {
            builder = builder.watching_with(with.parse::<WatchingWith>()?);
        }
        if let Some(platforms) = &self.platforms {
            builder = builder.platforms(parse_all::<Platform>(platforms)?);
        }
        if let Some(languages) = &self.languages {
            builder = builder.languages(parse_all::<Language>(languages)?);
        }
        if let Some(genre) = text.genre_preferences {
            builder = builder.genre_preferences(genre);
        }
        if let Some(avoid) = text.avoid {
            builder = builder.avoid(avoid);
        }
        if let Some(context) = text.additional_context {
            builder = builder.additional_context(context);
        }

        Ok(builder.build())
    }
}

/// Parse every entry of a list, skipping blank entries
pub fn parse_all<T: CatalogOption>(values: &[String]) -> Result<Vec<T>, InvalidOptionError> {
    values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .map(|v| T::parse_option(v))
        .collect()
}
