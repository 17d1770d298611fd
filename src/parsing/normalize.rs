//! Lexical normalization of raw export text.
//!
//! iOS exports sprinkle directional marks around timestamps and may wrap one
//! logical message over several physical lines, so the bracketed form is
//! flattened into a single line of single-spaced text. Android exports are
//! line oriented and only need their narrow no-break space fixed.
//!
//! Both normalizers are idempotent and borrow the input when nothing changes.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::parser::FormatTag;

/// Invisible marks removed from iOS exports: LRM, RLM, NBSP, ZWSP.
pub const INVISIBLE_MARKS: [char; 4] = ['\u{200E}', '\u{200F}', '\u{00A0}', '\u{200B}'];

/// Narrow no-break space Android puts between the time and am/pm.
pub const NARROW_NO_BREAK_SPACE: char = '\u{202F}';

// Any whitespace run that is not already a single ASCII space.
static UNCOLLAPSED_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}|[^\S ]").expect("whitespace pattern is valid"));

/// Normalizes raw text for the given format.
///
/// # Example
///
/// ```rust
/// use chatstat::FormatTag;
/// use chatstat::parsing::normalize;
///
/// let text = "[15/08/23, 9:07:00 AM] Bob:\u{200E} hi\n  there";
/// assert_eq!(
///     normalize(text, FormatTag::Bracketed),
///     "[15/08/23, 9:07:00 AM] Bob: hi there"
/// );
/// ```
pub fn normalize(raw: &str, format: FormatTag) -> Cow<'_, str> {
    match format {
        FormatTag::Bracketed => normalize_bracketed(raw),
        FormatTag::Dashed => normalize_dashed(raw),
    }
}

/// Strips invisible marks, then collapses every whitespace run to one space.
pub fn normalize_bracketed(raw: &str) -> Cow<'_, str> {
    let stripped: Cow<'_, str> = if raw.contains(INVISIBLE_MARKS) {
        Cow::Owned(raw.replace(INVISIBLE_MARKS, ""))
    } else {
        Cow::Borrowed(raw)
    };

    let collapsed = match UNCOLLAPSED_WHITESPACE.replace_all(&stripped, " ") {
        Cow::Owned(collapsed) => Some(collapsed),
        Cow::Borrowed(_) => None,
    };
    collapsed.map_or(stripped, Cow::Owned)
}

/// Replaces the narrow no-break space with an ordinary space.
pub fn normalize_dashed(raw: &str) -> Cow<'_, str> {
    if raw.contains(NARROW_NO_BREAK_SPACE) {
        Cow::Owned(raw.replace(NARROW_NO_BREAK_SPACE, " "))
    } else {
        Cow::Borrowed(raw)
    }
}
