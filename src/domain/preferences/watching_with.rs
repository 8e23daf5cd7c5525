//! Viewing companion options

use std::fmt;
use std::str::FromStr;

use super::catalog::CatalogOption;
use crate::domain::error::InvalidOptionError;

/// All available companion types
pub const ALL_COMPANIONS: &[WatchingWith] = &[
    WatchingWith::Alone,
    WatchingWith::Partner,
    WatchingWith::FamilyWithKids,
    WatchingWith::FamilyAdults,
    WatchingWith::Friends,
    WatchingWith::Roommates,
];

/// Who is watching along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WatchingWith {
    #[default]
    Alone,
    Partner,
    FamilyWithKids,
    FamilyAdults,
    Friends,
    Roommates,
}

impl CatalogOption for WatchingWith {
    const KIND: &'static str = "companion";

    fn all() -> &'static [Self] {
        ALL_COMPANIONS
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Alone => "alone",
            Self::Partner => "partner",
            Self::FamilyWithKids => "family-kids",
            Self::FamilyAdults => "family-adults",
            Self::Friends => "friends",
            Self::Roommates => "roommates",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Alone => "Alone",
            Self::Partner => "Partner/Date",
            Self::FamilyWithKids => "Family (with kids)",
            Self::FamilyAdults => "Family (adults only)",
            Self::Friends => "Friends",
            Self::Roommates => "Roommates",
        }
    }
}

impl FromStr for WatchingWith {
    type Err = InvalidOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_option(s)
    }
}

impl fmt::Display for WatchingWith {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_label_with_parentheses() {
        assert_eq!(
            "Family (with kids)".parse::<WatchingWith>().unwrap(),
            WatchingWith::FamilyWithKids
        );
        assert_eq!(
            "partner/date".parse::<WatchingWith>().unwrap(),
            WatchingWith::Partner
        );
    }

    #[test]
    fn parse_invalid() {
        let err = "coworkers".parse::<WatchingWith>().unwrap_err();
        assert!(err.to_string().contains("companion"));
    }

    #[test]
    fn display_uses_slug() {
        assert_eq!(WatchingWith::FamilyAdults.to_string(), "family-adults");
    }
}
