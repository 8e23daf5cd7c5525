//! Preference record value object

use super::catalog::CatalogOption;
use super::{Language, Mood, Platform, TimeAvailable, WatchingWith, DEFAULT_LANGUAGES};

const PLATFORMS_FALLBACK: &str = "Not specified";
const LANGUAGES_FALLBACK: &str = "No preference";
const GENRE_FALLBACK: &str = "No specific preference";
const AVOID_FALLBACK: &str = "Nothing specific";
const CONTEXT_FALLBACK: &str = "None";

/// Snapshot of what the viewer told us for one recommendation request.
///
/// Built once through [`PreferenceRecordBuilder`] and never mutated.
/// Platforms and languages keep their first-selection order without
/// duplicates; free-text fields are trimmed and blank text is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceRecord {
    mood: Mood,
    time_available: TimeAvailable,
    watching_with: WatchingWith,
    platforms: Vec<Platform>,
    languages: Vec<Language>,
    genre_preferences: Option<String>,
    avoid: Option<String>,
    additional_context: Option<String>,
}

impl PreferenceRecord {
    pub fn builder() -> PreferenceRecordBuilder {
        PreferenceRecordBuilder::default()
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn time_available(&self) -> TimeAvailable {
        self.time_available
    }

    pub fn watching_with(&self) -> WatchingWith {
        self.watching_with
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn genre_preferences(&self) -> Option<&str> {
        self.genre_preferences.as_deref()
    }

    pub fn avoid(&self) -> Option<&str> {
        self.avoid.as_deref()
    }

    pub fn additional_context(&self) -> Option<&str> {
        self.additional_context.as_deref()
    }

    /// Platforms joined for display, or the fallback when none were picked
    pub fn platforms_display(&self) -> String {
        join_labels(&self.platforms).unwrap_or_else(|| PLATFORMS_FALLBACK.to_string())
    }

    /// Languages joined for display, or the fallback when none were picked
    pub fn languages_display(&self) -> String {
        join_labels(&self.languages).unwrap_or_else(|| LANGUAGES_FALLBACK.to_string())
    }

    pub fn genre_display(&self) -> &str {
        self.genre_preferences().unwrap_or(GENRE_FALLBACK)
    }

    pub fn avoid_display(&self) -> &str {
        self.avoid().unwrap_or(AVOID_FALLBACK)
    }

    pub fn context_display(&self) -> &str {
        self.additional_context().unwrap_or(CONTEXT_FALLBACK)
    }
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn join_labels<T: CatalogOption>(options: &[T]) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    Some(
        options
            .iter()
            .map(|option| option.label())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

fn clean_text(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

/// Builder for [`PreferenceRecord`].
///
/// Starts from the form defaults: relaxed mood, 2-3 hours, watching alone,
/// no platforms, Hindi and English.
#[derive(Debug, Clone)]
pub struct PreferenceRecordBuilder {
    mood: Mood,
    time_available: TimeAvailable,
    watching_with: WatchingWith,
    platforms: Vec<Platform>,
    languages: Vec<Language>,
    genre_preferences: Option<String>,
    avoid: Option<String>,
    additional_context: Option<String>,
}

impl Default for PreferenceRecordBuilder {
    fn default() -> Self {
        Self {
            mood: Mood::default(),
            time_available: TimeAvailable::default(),
            watching_with: WatchingWith::default(),
            platforms: Vec::new(),
            languages: DEFAULT_LANGUAGES.to_vec(),
            genre_preferences: None,
            avoid: None,
            additional_context: None,
        }
    }
}

impl PreferenceRecordBuilder {
    pub fn mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    pub fn time_available(mut self, time: TimeAvailable) -> Self {
        self.time_available = time;
        self
    }

    pub fn watching_with(mut self, companion: WatchingWith) -> Self {
        self.watching_with = companion;
        self
    }

    /// Replace the platform selection
    pub fn platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.platforms.clear();
        for platform in platforms {
            push_unique(&mut self.platforms, platform);
        }
        self
    }

    /// Replace the language selection (an empty selection means no preference)
    pub fn languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.languages.clear();
        for language in languages {
            push_unique(&mut self.languages, language);
        }
        self
    }

    pub fn genre_preferences(mut self, genre: impl Into<String>) -> Self {
        self.genre_preferences = Some(genre.into());
        self
    }

    pub fn avoid(mut self, avoid: impl Into<String>) -> Self {
        self.avoid = Some(avoid.into());
        self
    }

    pub fn additional_context(mut self, context: impl Into<String>) -> Self {
        self.additional_context = Some(context.into());
        self
    }

    pub fn build(self) -> PreferenceRecord {
        PreferenceRecord {
            mood: self.mood,
            time_available: self.time_available,
            watching_with: self.watching_with,
            platforms: self.platforms,
            languages: self.languages,
            genre_preferences: clean_text(self.genre_preferences),
            avoid: clean_text(self.avoid),
            additional_context: clean_text(self.additional_context),
        }
    }
}
