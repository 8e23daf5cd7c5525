//! Streaming platform catalog

use std::fmt;
use std::str::FromStr;

use super::catalog::CatalogOption;
use crate::domain::error::InvalidOptionError;

/// All known platforms
pub const ALL_PLATFORMS: &[Platform] = &[
    Platform::Netflix,
    Platform::PrimeVideo,
    Platform::JioCinema,
    Platform::SonyLiv,
    Platform::SunNxt,
    Platform::AppleTv,
    Platform::Zee5,
    Platform::Other,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Netflix,
    PrimeVideo,
    JioCinema,
    SonyLiv,
    SunNxt,
    AppleTv,
    Zee5,
    Other,
}

impl CatalogOption for Platform {
    const KIND: &'static str = "platform";

    fn all() -> &'static [Self] {
        ALL_PLATFORMS
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Netflix => "netflix",
            Self::PrimeVideo => "prime-video",
            Self::JioCinema => "jiocinema",
            Self::SonyLiv => "sonyliv",
            Self::SunNxt => "sun-nxt",
            Self::AppleTv => "apple-tv",
            Self::Zee5 => "zee5",
            Self::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Netflix => "Netflix",
            Self::PrimeVideo => "Amazon Prime Video",
            Self::JioCinema => "JioCinema (Hotstar)",
            Self::SonyLiv => "SonyLIV",
            Self::SunNxt => "Sun NXT",
            Self::AppleTv => "Apple TV+",
            Self::Zee5 => "ZEE5",
            Self::Other => "Other/Don't specify",
        }
    }
}

impl FromStr for Platform {
    type Err = InvalidOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_option(s)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_platforms() {
        assert_eq!("netflix".parse::<Platform>().unwrap(), Platform::Netflix);
        assert_eq!("Apple TV+".parse::<Platform>().unwrap(), Platform::AppleTv);
        assert_eq!(
            "jiocinema (hotstar)".parse::<Platform>().unwrap(),
            Platform::JioCinema
        );
    }

    #[test]
    fn parse_invalid() {
        assert!("hulu".parse::<Platform>().is_err());
    }

    #[test]
    fn all_platforms_constant() {
        assert_eq!(ALL_PLATFORMS.len(), 8);
    }
}
