//! Viewer preferences domain module

mod catalog;
mod language;
mod mood;
mod platform;
mod record;
mod time_available;
mod watching_with;

pub use catalog::CatalogOption;
pub use language::{Language, ALL_LANGUAGES, DEFAULT_LANGUAGES};
pub use mood::{Mood, ALL_MOODS};
pub use platform::{Platform, ALL_PLATFORMS};
pub use record::{PreferenceRecord, PreferenceRecordBuilder};
pub use time_available::{TimeAvailable, ALL_TIME_BANDS};
pub use watching_with::{WatchingWith, ALL_COMPANIONS};
