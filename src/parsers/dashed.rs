//! Android (dashed) export parser.
//!
//! Android writes one message per physical line:
//! ```text
//! 15/08/23, 9:05 am - Alice: Hello there
//! 15/08/23, 9:06 am - Alice created group "Trip"
//! 15/08/23, 9:07 am - Bob: <Media omitted>
//! ```
//!
//! Lines without the `date, time - ` prefix are dropped as malformed, or,
//! with [`DashedConfig::join_continuation_lines`], appended to the record
//! above them. Media placeholders are filtered after the records are built.

use tracing::{debug, trace};

use crate::config::DashedConfig;
use crate::core::ParseStats;
use crate::error::{DropReason, Result};
use crate::parser::{FormatTag, TranscriptParser};
use crate::parsing::{
    ClockPrecision, match_dashed_line, normalize_dashed, parse_timestamp, split_dashed_sender,
};
use crate::record::{MessageRecord, ParsedTranscript, Sender};

/// Parser for Android exports.
///
/// # Example
///
/// ```rust
/// use chatstat::parsers::DashedParser;
/// use chatstat::parser::TranscriptParser;
/// use chatstat::Sender;
///
/// let parser = DashedParser::new();
/// let transcript = parser.parse_str("15/08/23, 9:06 am - Alice created group \"Trip\"")?;
/// assert_eq!(transcript.records()[0].sender, Sender::System);
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DashedParser {
    config: DashedConfig,
}

impl DashedParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: DashedConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &DashedConfig {
        &self.config
    }

    pub(crate) fn parse_with(raw: &str, config: &DashedConfig) -> Result<ParsedTranscript> {
        let text = normalize_dashed(raw);
        let mut stats = ParseStats::default();
        let mut records: Vec<MessageRecord> = Vec::new();
        // Whether the most recent message line produced a record that a
        // continuation line may extend.
        let mut open_record = false;

        for (index, line) in text.lines().enumerate() {
            stats.candidates += 1;
            let line_no = index + 1;

            let Some(parts) = match_dashed_line(line) else {
                if config.join_continuation_lines && open_record && !line.trim().is_empty() {
                    if let Some(last) = records.last_mut() {
                        last.body.push('\n');
                        last.body.push_str(line);
                        stats.continuation_lines += 1;
                        continue;
                    }
                }
                trace!(line = line_no, reason = %DropReason::MalformedLine, "Dropping line");
                stats.record_drop(DropReason::MalformedLine);
                continue;
            };

            let Some(timestamp) = parse_timestamp(
                parts.date,
                parts.clock,
                parts.meridiem,
                ClockPrecision::Minutes,
            ) else {
                debug!(
                    line = line_no,
                    date = parts.date,
                    clock = parts.clock,
                    reason = %DropReason::TimestampParseFailure,
                    "Dropping line"
                );
                stats.record_drop(DropReason::TimestampParseFailure);
                open_record = false;
                continue;
            };

            let (sender, body) = match split_dashed_sender(parts.remainder) {
                (Some(name), body) => (Sender::User(name.to_string()), body),
                (None, remainder) => (Sender::System, remainder),
            };
            records.push(MessageRecord::new(timestamp, sender, body));
            open_record = true;
        }

        let before = records.len();
        records.retain(|record| record.body != config.media_placeholder);
        let filtered = before - records.len();
        for _ in 0..filtered {
            stats.record_drop(DropReason::MediaPlaceholder);
        }

        stats.records = records.len();
        debug!(
            lines = stats.candidates,
            records = stats.records,
            malformed = stats.malformed_lines,
            media = stats.media_placeholders,
            bad_timestamps = stats.bad_timestamps,
            "Parsed Android transcript"
        );

        Ok(ParsedTranscript::new(FormatTag::Dashed, records, stats))
    }
}

impl TranscriptParser for DashedParser {
    fn name(&self) -> &'static str {
        "Android"
    }

    fn format(&self) -> FormatTag {
        FormatTag::Dashed
    }

    fn parse_str(&self, raw: &str) -> Result<ParsedTranscript> {
        Self::parse_with(raw, &self.config)
    }
}
