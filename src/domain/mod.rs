//! Domain layer - Core business logic
//!
//! Contains the option catalogs, the preference record, prompt assembly,
//! response formatting, configuration values and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod preferences;
pub mod recommendation;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use preferences::{
    CatalogOption, Language, Mood, Platform, PreferenceRecord, TimeAvailable, WatchingWith,
};
pub use recommendation::{format_response, is_title_line, RecommendationPrompt};
