//! Mood options

use std::fmt;
use std::str::FromStr;

use super::catalog::CatalogOption;
use crate::domain::error::InvalidOptionError;

/// All available moods
pub const ALL_MOODS: &[Mood] = &[
    Mood::Relaxed,
    Mood::Excited,
    Mood::Thoughtful,
    Mood::Sad,
    Mood::Happy,
    Mood::Stressed,
    Mood::Romantic,
    Mood::Adventurous,
];

/// How the viewer feels tonight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mood {
    #[default]
    Relaxed,
    Excited,
    Thoughtful,
    Sad,
    Happy,
    Stressed,
    Romantic,
    Adventurous,
}

impl CatalogOption for Mood {
    const KIND: &'static str = "mood";

    fn all() -> &'static [Self] {
        ALL_MOODS
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Relaxed => "relaxed",
            Self::Excited => "excited",
            Self::Thoughtful => "thoughtful",
            Self::Sad => "sad",
            Self::Happy => "happy",
            Self::Stressed => "stressed",
            Self::Romantic => "romantic",
            Self::Adventurous => "adventurous",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Relaxed => "Relaxed/Chill",
            Self::Excited => "Excited/Energetic",
            Self::Thoughtful => "Thoughtful/Reflective",
            Self::Sad => "Sad/Need comfort",
            Self::Happy => "Happy/Celebratory",
            Self::Stressed => "Stressed/Need escape",
            Self::Romantic => "Romantic",
            Self::Adventurous => "Adventurous",
        }
    }
}

impl FromStr for Mood {
    type Err = InvalidOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_option(s)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_slug_and_label() {
        assert_eq!("romantic".parse::<Mood>().unwrap(), Mood::Romantic);
        assert_eq!("Sad/Need comfort".parse::<Mood>().unwrap(), Mood::Sad);
        assert_eq!("  STRESSED ".parse::<Mood>().unwrap(), Mood::Stressed);
    }

    #[test]
    fn parse_invalid() {
        assert!("grumpy".parse::<Mood>().is_err());
    }

    #[test]
    fn default_is_relaxed() {
        assert_eq!(Mood::default(), Mood::Relaxed);
        assert_eq!(Mood::default().label(), "Relaxed/Chill");
    }

    #[test]
    fn all_moods_constant() {
        assert_eq!(ALL_MOODS.len(), 8);
    }
}
