//! Markdown formatting of raw recommendation text
//!
//! The model is asked to open each recommendation with a `Movie Title (Year)`
//! line, but nothing enforces it. Lines that look like such a title are
//! promoted to headings; everything else passes through verbatim.

/// Markdown prefix for promoted title lines
pub const HEADING_MARKER: &str = "### ";

/// Lines at or above this many characters are treated as prose
pub const MAX_TITLE_CHARS: usize = 150;

/// Whether a line looks like a `Title (Year)` heading.
///
/// Requires an opening and a closing parenthesis and at least one digit,
/// the first `(` must not be the first character, and the line must be
/// shorter than [`MAX_TITLE_CHARS`] characters.
pub fn is_title_line(line: &str) -> bool {
    let has_close = line.contains(')');
    let has_digit = line.chars().any(|c| c.is_ascii_digit());

    match line.find('(') {
        Some(open) => {
            has_close && has_digit && open > 0 && line.chars().count() < MAX_TITLE_CHARS
        }
        None => false,
    }
}

/// Promote title lines of the raw generation output to level-3 headings.
///
/// Splits on `\n` and rejoins with `\n`, so empty lines and any trailing
/// `\r` survive untouched.
pub fn format_response(raw: &str) -> String {
    raw.split('\n')
        .map(|line| {
            if is_title_line(line) {
                format!("{HEADING_MARKER}{line}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
