//! Line matcher for Android (dashed) exports.
//!
//! Every message is one physical line of the shape
//! `DD/MM/YY, H:MM am - remainder`, where the remainder is either
//! `Sender: body` or a sender-less system notice.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern of a dashed message line.
pub const LINE_PATTERN: &str = r"^(\d{2}/\d{2}/\d{2}), (\d{1,2}:\d{2})\s([ap]m) - (.*)";

static LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINE_PATTERN).expect("line pattern is valid"));

static SENDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]+):\s(.*)").expect("sender pattern is valid"));

/// The parts of a matched dashed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashedLine<'a> {
    /// `DD/MM/YY`
    pub date: &'a str,
    /// `H:MM`
    pub clock: &'a str,
    /// `am` or `pm`
    pub meridiem: &'a str,
    /// Everything after `" - "`
    pub remainder: &'a str,
}

/// Matches one line, or returns `None` if it is not a message line.
///
/// # Example
///
/// ```rust
/// use chatstat::parsing::match_dashed_line;
///
/// let line = match_dashed_line("15/08/23, 9:05 am - Alice: Hello there").unwrap();
/// assert_eq!(line.date, "15/08/23");
/// assert_eq!(line.remainder, "Alice: Hello there");
///
/// assert!(match_dashed_line("just a continuation").is_none());
/// ```
pub fn match_dashed_line(line: &str) -> Option<DashedLine<'_>> {
    let caps = LINE.captures(line)?;
    Some(DashedLine {
        date: caps.get(1)?.as_str(),
        clock: caps.get(2)?.as_str(),
        meridiem: caps.get(3)?.as_str(),
        remainder: caps.get(4)?.as_str(),
    })
}

/// Splits a remainder into `(Some(sender), body)`, or `(None, remainder)`
/// when there is no `name: ` prefix.
///
/// ```rust
/// use chatstat::parsing::split_dashed_sender;
///
/// assert_eq!(split_dashed_sender("Alice: hi: there"), (Some("Alice"), "hi: there"));
/// assert_eq!(
///     split_dashed_sender("Alice created group \"Trip\""),
///     (None, "Alice created group \"Trip\"")
/// );
/// ```
pub fn split_dashed_sender(remainder: &str) -> (Option<&str>, &str) {
    match SENDER.captures(remainder) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(sender), Some(body)) => (Some(sender.as_str()), body.as_str()),
            _ => (None, remainder),
        },
        None => (None, remainder),
    }
}
