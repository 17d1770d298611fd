//! Anchor tokenizer for iOS (bracketed) exports.
//!
//! After normalization a bracketed export is one line of text in which every
//! message starts with an anchor such as `[15/08/23, 9:07:00 AM]`. The
//! tokenizer finds all anchors in a single scan and slices the text between
//! consecutive anchors, so a body may contain colons, brackets or anything
//! else short of another full anchor.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern of a bracketed timestamp anchor.
pub const ANCHOR_PATTERN: &str = r"\[(\d{2}/\d{2}/\d{2}), (\d{1,2}:\d{2}:\d{2}) (AM|PM)\]";

static ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ANCHOR_PATTERN).expect("anchor pattern is valid"));

/// A timestamp anchor and its byte range in the normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor<'a> {
    /// `DD/MM/YY`
    pub date: &'a str,
    /// `H:MM:SS`
    pub clock: &'a str,
    /// `AM` or `PM`
    pub meridiem: &'a str,
    pub start: usize,
    pub end: usize,
}

/// One message span: an anchor and the text up to the next anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub anchor: Anchor<'a>,
    /// Text right after the closing bracket, up to the next anchor or end.
    pub rest: &'a str,
}

/// Splits normalized text into anchor-delimited spans, in text order.
///
/// Text before the first anchor belongs to no message and is ignored.
///
/// # Example
///
/// ```rust
/// use chatstat::parsing::split_spans;
///
/// let text = "[15/08/23, 9:07:00 AM] Bob: hi [15/08/23, 9:08:00 AM] Ann: yo";
/// let spans = split_spans(text);
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[0].rest, " Bob: hi ");
/// assert_eq!(spans[1].anchor.clock, "9:08:00");
/// ```
pub fn split_spans(text: &str) -> Vec<Span<'_>> {
    let anchors: Vec<Anchor<'_>> = ANCHOR
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Anchor {
                date: caps.get(1)?.as_str(),
                clock: caps.get(2)?.as_str(),
                meridiem: caps.get(3)?.as_str(),
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect();

    anchors
        .iter()
        .enumerate()
        .map(|(i, anchor)| {
            let stop = anchors.get(i + 1).map_or(text.len(), |next| next.start);
            Span {
                anchor: *anchor,
                rest: &text[anchor.end..stop],
            }
        })
        .collect()
}

/// Splits the text after an anchor into `(sender, body)`.
///
/// The sender is everything after the single space that follows the anchor
/// up to the first colon, and must be non-empty. The body skips leading
/// whitespace and drops trailing whitespace (the space the normalizer left
/// where a line break used to be). Returns `None` when there is no colon.
///
/// ```rust
/// use chatstat::parsing::split_bracketed_sender;
///
/// assert_eq!(
///     split_bracketed_sender(" Bob: see 10:30 ok "),
///     Some(("Bob", "see 10:30 ok"))
/// );
/// assert_eq!(split_bracketed_sender(" no colon here"), None);
/// ```
pub fn split_bracketed_sender(rest: &str) -> Option<(&str, &str)> {
    let rest = rest.strip_prefix(' ')?;
    let (sender, body) = rest.split_once(':')?;
    if sender.is_empty() {
        return None;
    }
    Some((sender, body.trim()))
}
