//! Language catalog

use std::fmt;
use std::str::FromStr;

use super::catalog::CatalogOption;
use crate::domain::error::InvalidOptionError;

/// All known languages
pub const ALL_LANGUAGES: &[Language] = &[
    Language::Hindi,
    Language::Tamil,
    Language::Telugu,
    Language::Malayalam,
    Language::Kannada,
    Language::Bengali,
    Language::Marathi,
    Language::Punjabi,
    Language::English,
    Language::OtherIndian,
];

/// Languages preselected when nothing is configured
pub const DEFAULT_LANGUAGES: &[Language] = &[Language::Hindi, Language::English];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Hindi,
    Tamil,
    Telugu,
    Malayalam,
    Kannada,
    Bengali,
    Marathi,
    Punjabi,
    English,
    OtherIndian,
}

impl CatalogOption for Language {
    const KIND: &'static str = "language";

    fn all() -> &'static [Self] {
        ALL_LANGUAGES
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Hindi => "hindi",
            Self::Tamil => "tamil",
            Self::Telugu => "telugu",
            Self::Malayalam => "malayalam",
            Self::Kannada => "kannada",
            Self::Bengali => "bengali",
            Self::Marathi => "marathi",
            Self::Punjabi => "punjabi",
            Self::English => "english",
            Self::OtherIndian => "other-indian",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Hindi => "Hindi",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
            Self::Malayalam => "Malayalam",
            Self::Kannada => "Kannada",
            Self::Bengali => "Bengali",
            Self::Marathi => "Marathi",
            Self::Punjabi => "Punjabi",
            Self::English => "English",
            Self::OtherIndian => "Other Indian languages",
        }
    }
}

impl FromStr for Language {
    type Err = InvalidOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_option(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_languages() {
        assert_eq!("Tamil".parse::<Language>().unwrap(), Language::Tamil);
        assert_eq!(
            "other indian languages".parse::<Language>().unwrap(),
            Language::OtherIndian
        );
    }

    #[test]
    fn defaults_are_hindi_and_english() {
        assert_eq!(DEFAULT_LANGUAGES, &[Language::Hindi, Language::English]);
    }
}
