//! Viewing time options

use std::fmt;
use std::str::FromStr;

use super::catalog::CatalogOption;
use crate::domain::error::InvalidOptionError;

/// All available duration bands
pub const ALL_TIME_BANDS: &[TimeAvailable] = &[
    TimeAvailable::UnderNinetyMinutes,
    TimeAvailable::NinetyToTwoHours,
    TimeAvailable::TwoToThreeHours,
    TimeAvailable::OverThreeHours,
];

/// How much time the viewer has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeAvailable {
    UnderNinetyMinutes,
    NinetyToTwoHours,
    #[default]
    TwoToThreeHours,
    OverThreeHours,
}

impl CatalogOption for TimeAvailable {
    const KIND: &'static str = "time";

    fn all() -> &'static [Self] {
        ALL_TIME_BANDS
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::UnderNinetyMinutes => "under-1.5h",
            Self::NinetyToTwoHours => "1.5-2h",
            Self::TwoToThreeHours => "2-3h",
            Self::OverThreeHours => "over-3h",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::UnderNinetyMinutes => "Less than 1.5 hours",
            Self::NinetyToTwoHours => "1.5-2 hours",
            Self::TwoToThreeHours => "2-3 hours",
            Self::OverThreeHours => "More than 3 hours",
        }
    }
}

impl FromStr for TimeAvailable {
    type Err = InvalidOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_option(s)
    }
}

impl fmt::Display for TimeAvailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
