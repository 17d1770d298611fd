//! iOS (bracketed) export parser.
//!
//! Pipeline: normalize to one line, split into anchor spans, drop omitted
//! attachments, split sender from body, reassign group events to the
//! sentinel, then parse each timestamp and derive calendar fields.
//!
//! Example input:
//! ```text
//! [15/08/23, 9:05:12 AM] Trip: ‎Messages and calls are end-to-end encrypted.
//! [15/08/23, 9:06:40 AM] Alice: Hello
//! there
//! [15/08/23, 9:07:00 AM] Bob: ‎image omitted
//! ```

use tracing::{debug, trace, warn};

use crate::config::BracketedConfig;
use crate::core::ParseStats;
use crate::error::{ChatstatError, DropReason, Result};
use crate::parser::{FormatTag, TranscriptParser};
use crate::parsing::{
    Anchor, ClockPrecision, normalize_bracketed, parse_timestamp, split_bracketed_sender,
    split_spans,
};
use crate::record::{MessageRecord, ParsedTranscript, Sender};

/// Parser for iOS exports.
///
/// # Example
///
/// ```rust
/// use chatstat::parsers::BracketedParser;
/// use chatstat::parser::TranscriptParser;
///
/// let parser = BracketedParser::new();
/// let transcript = parser.parse_str("[15/08/23, 9:06:40 AM] Alice: Hello\nthere")?;
/// assert_eq!(transcript.records()[0].body, "Hello there");
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BracketedParser {
    config: BracketedConfig,
}

impl BracketedParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: BracketedConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &BracketedConfig {
        &self.config
    }

    pub(crate) fn parse_with(raw: &str, config: &BracketedConfig) -> Result<ParsedTranscript> {
        let text = normalize_bracketed(raw);
        let spans = split_spans(&text);

        let mut stats = ParseStats {
            candidates: spans.len(),
            ..ParseStats::default()
        };

        // Segment first: timestamps and (sender, body) pairs must line up
        // one to one before any record is built.
        let mut timestamps: Vec<Anchor<'_>> = Vec::with_capacity(spans.len());
        let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(spans.len());

        for span in &spans {
            let split = split_bracketed_sender(span.rest);

            if let Some((_, body)) = split {
                if let Some(phrase) = config.omission_match(body) {
                    trace!(offset = span.anchor.start, phrase, "Removing omitted attachment");
                    stats.record_drop(DropReason::OmissionSpan);
                    continue;
                }
            }

            timestamps.push(span.anchor);
            match split {
                Some(pair) => pairs.push(pair),
                None => debug!(
                    offset = span.anchor.start,
                    "Span has no sender separator; segmentation diverged"
                ),
            }
        }

        if timestamps.len() != pairs.len() {
            warn!(
                timestamps = timestamps.len(),
                messages = pairs.len(),
                "Bracketed transcript could not be aligned"
            );
            return Err(ChatstatError::alignment_mismatch(
                timestamps.len(),
                pairs.len(),
            ));
        }

        let mut records = Vec::with_capacity(pairs.len());
        for (anchor, (sender, body)) in timestamps.iter().zip(pairs) {
            let Some(timestamp) = parse_timestamp(
                anchor.date,
                anchor.clock,
                anchor.meridiem,
                ClockPrecision::Seconds,
            ) else {
                debug!(
                    offset = anchor.start,
                    date = anchor.date,
                    clock = anchor.clock,
                    reason = %DropReason::TimestampParseFailure,
                    "Dropping record"
                );
                stats.record_drop(DropReason::TimestampParseFailure);
                continue;
            };

            let sender = if config.is_notification(body) {
                Sender::GroupNotification
            } else {
                Sender::User(sender.to_string())
            };
            let body = if config.strip_tilde {
                body.replace('~', "")
            } else {
                body.to_string()
            };

            records.push(MessageRecord::new(timestamp, sender, body));
        }

        stats.records = records.len();
        debug!(
            anchors = stats.candidates,
            records = stats.records,
            omitted = stats.omitted_spans,
            bad_timestamps = stats.bad_timestamps,
            "Parsed iOS transcript"
        );

        Ok(ParsedTranscript::new(FormatTag::Bracketed, records, stats))
    }
}

impl TranscriptParser for BracketedParser {
    fn name(&self) -> &'static str {
        "iOS"
    }

    fn format(&self) -> FormatTag {
        FormatTag::Bracketed
    }

    fn parse_str(&self, raw: &str) -> Result<ParsedTranscript> {
        Self::parse_with(raw, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> ParsedTranscript {
        BracketedParser::new().parse_str(raw).unwrap()
    }

    #[test]
    fn test_basic_messages() {
        let t = parse(
            "[15/08/23, 9:06:40 AM] Alice: Hello\n[15/08/23, 9:07:10 PM] Bob: Hi: there",
        );
        assert_eq!(t.len(), 2);
        assert_eq!(t.records()[0].sender, Sender::User("Alice".into()));
        assert_eq!(t.records()[0].body, "Hello");
        assert_eq!(t.records()[1].body, "Hi: there");
        assert_eq!(t.records()[1].hour(), 21);
    }

    #[test]
    fn test_multiline_body_is_joined() {
        let t = parse("[15/08/23, 9:06:40 AM] Alice: line one\nline two\n\nline three");
        assert_eq!(t.records()[0].body, "line one line two line three");
    }

    #[test]
    fn test_omission_span_removed_entirely() {
        let t = parse(
            "[15/08/23, 9:06:00 AM] Alice: before\n\
             [15/08/23, 9:07:00 AM] Bob: \u{200E}image omitted\n\
             [15/08/23, 9:08:00 AM] Alice: after",
        );
        assert_eq!(t.len(), 2);
        assert_eq!(t.records()[0].body, "before");
        assert_eq!(t.records()[1].body, "after");
        assert_eq!(t.stats().omitted_spans, 1);
        assert_eq!(t.stats().candidates, 3);
    }

    #[test]
    fn test_all_default_omissions() {
        let raw = [
            "sticker omitted",
            "image omitted",
            "video omitted",
            "audio omitted",
        ]
        .iter()
        .enumerate()
        .map(|(i, p)| format!("[15/08/23, 9:0{i}:00 AM] Bob: {p}"))
        .collect::<Vec<_>>()
        .join("\n");
        let t = parse(&raw);
        assert!(t.is_empty());
        assert_eq!(t.stats().omitted_spans, 4);
    }

    #[test]
    fn test_notification_reassigns_sender() {
        let t = parse(
            "[15/08/23, 9:00:00 AM] Trip: \u{200E}Messages and calls are end-to-end encrypted. Tap to learn more.\n\
             [15/08/23, 9:01:00 AM] Trip: \u{200E}Carol joined using this group's invite link",
        );
        assert_eq!(t.len(), 2);
        assert!(t.iter().all(|r| r.sender == Sender::GroupNotification));
    }

    #[test]
    fn test_tilde_stripped_from_body_only() {
        let t = parse("[15/08/23, 9:00:00 AM] ~ Dan: ~hello~");
        assert_eq!(t.records()[0].sender, Sender::User("~ Dan".into()));
        assert_eq!(t.records()[0].body, "hello");
    }

    #[test]
    fn test_tilde_kept_when_disabled() {
        let parser = BracketedParser::with_config(BracketedConfig::new().with_strip_tilde(false));
        let t = parser.parse_str("[15/08/23, 9:00:00 AM] Dan: ~hi~").unwrap();
        assert_eq!(t.records()[0].body, "~hi~");
    }

    #[test]
    fn test_missing_sender_is_alignment_mismatch() {
        let err = BracketedParser::new()
            .parse_str("[15/08/23, 9:00:00 AM] Alice: ok\n[15/08/23, 9:01:00 AM] no separator")
            .unwrap_err();
        assert!(matches!(
            err,
            ChatstatError::AlignmentMismatch {
                timestamps: 2,
                messages: 1
            }
        ));
    }

    #[test]
    fn test_bad_timestamp_dropped() {
        let t = parse(
            "[31/02/23, 9:00:00 AM] Alice: impossible date\n[01/03/23, 9:00:00 AM] Alice: fine",
        );
        assert_eq!(t.len(), 1);
        assert_eq!(t.records()[0].body, "fine");
        assert_eq!(t.stats().bad_timestamps, 1);
    }

    #[test]
    fn test_empty_and_anchorless_input() {
        assert!(parse("").is_empty());
        assert!(parse("no anchors at all").is_empty());
    }

    #[test]
    fn test_order_preserved_without_sorting() {
        let t = parse(
            "[02/01/24, 9:00:00 AM] A: second day\n[01/01/24, 9:00:00 AM] B: first day",
        );
        assert_eq!(t.records()[0].body, "second day");
        assert_eq!(t.records()[1].body, "first day");
    }
}
