//! Shared behavior of the fixed option catalogs

use crate::domain::error::InvalidOptionError;

/// A closed set of options offered to the user.
///
/// Every option has a short CLI slug (`as_str`) and the exact label that
/// is substituted into the recommendation prompt (`label`).
pub trait CatalogOption: Copy + Sized + 'static {
    /// Human-readable name of the catalog, used in error messages
    const KIND: &'static str;

    /// All options, in display order
    fn all() -> &'static [Self];

    /// Stable CLI identifier
    fn as_str(&self) -> &'static str;

    /// Label as it appears in the prompt
    fn label(&self) -> &'static str;

    /// Parse a slug or a label, ignoring case and surrounding whitespace
    fn parse_option(input: &str) -> Result<Self, InvalidOptionError> {
        let needle = input.trim();
        Self::all()
            .iter()
            .copied()
            .find(|option| {
                !needle.is_empty()
                    && (option.as_str().eq_ignore_ascii_case(needle)
                        || option.label().eq_ignore_ascii_case(needle))
            })
            .ok_or_else(|| InvalidOptionError {
                kind: Self::KIND,
                input: input.to_string(),
                valid: Self::valid_values(),
            })
    }

    /// Comma-separated list of valid slugs
    fn valid_values() -> String {
        Self::all()
            .iter()
            .map(|option| option.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
