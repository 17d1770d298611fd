//! Parsed message records and the transcript table.
//!
//! [`MessageRecord`] is the unit of output; [`ParsedTranscript`] is the ordered
//! table of records for one export, in the order the export lists them.
//!
//! # Wire contract
//!
//! Serializing a record produces exactly these keys, in this order:
//!
//! | Key | Source |
//! |-----|--------|
//! | `user` | [`Sender`] as text |
//! | `message` | body |
//! | `date` | `YYYY-MM-DD HH:MM:SS` |
//! | `only_date` | `YYYY-MM-DD` |
//! | `year`, `month`, `month_num`, `day`, `day_name`, `hour`, `minute` | calendar fields |
//! | `period` | hour bucket, e.g. `"14-15"` |
//!
//! ```
//! use chatstat::{FormatTag, parse};
//!
//! let transcript = parse("15/08/23, 9:05 am - Alice: Hello there", FormatTag::Dashed)?;
//! let json = serde_json::to_value(&transcript.records()[0])?;
//!
//! assert_eq!(json["user"], "Alice");
//! assert_eq!(json["period"], "09-10");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::core::ParseStats;
use crate::features::CalendarFeatures;
use crate::parser::FormatTag;

/// Wire value of the bracketed-format group event sentinel.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Wire value of the dashed-format system line sentinel.
pub const SYSTEM: &str = "System";

/// Column names of the record table, in wire order.
pub const COLUMNS: [&str; 12] = [
    "user",
    "message",
    "date",
    "only_date",
    "year",
    "month",
    "month_num",
    "day",
    "day_name",
    "hour",
    "minute",
    "period",
];

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub(crate) const ONLY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Who a message is attributed to.
///
/// The sentinels never compare equal to a real sender, even one whose
/// display name happens to be "System".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sender {
    /// A human-authored message with this display name.
    User(String),
    /// A group-level event in a bracketed export (join, encryption banner).
    GroupNotification,
    /// A sender-less line in a dashed export ("X created group Y").
    System,
}

impl Sender {
    /// Returns the wire text for this sender.
    pub fn as_str(&self) -> &str {
        match self {
            Sender::User(name) => name,
            Sender::GroupNotification => GROUP_NOTIFICATION,
            Sender::System => SYSTEM,
        }
    }

    /// Returns `true` for either sentinel.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Sender::User(_))
    }

    /// Returns the display name of a real sender.
    pub fn name(&self) -> Option<&str> {
        match self {
            Sender::User(name) => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Sender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One parsed message.
///
/// Constructed only from a timestamp that parsed successfully, so every
/// calendar field is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    /// Local date and time as exported (no timezone).
    pub timestamp: NaiveDateTime,
    pub sender: Sender,
    /// Message text after sender removal and cleanup. May be empty.
    pub body: String,
    /// Fields derived from `timestamp`.
    pub features: CalendarFeatures,
}

impl MessageRecord {
    /// Creates a record and derives its calendar fields.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstat::{MessageRecord, Sender};
    /// use chrono::NaiveDate;
    ///
    /// let ts = NaiveDate::from_ymd_opt(2023, 8, 15).unwrap().and_hms_opt(14, 0, 0).unwrap();
    /// let record = MessageRecord::new(ts, Sender::User("Alice".into()), "Hi");
    /// assert_eq!(record.hour_range(), "14-15");
    /// ```
    pub fn new(timestamp: NaiveDateTime, sender: Sender, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender,
            body: body.into(),
            features: CalendarFeatures::derive(timestamp),
        }
    }

    pub fn date_only(&self) -> NaiveDate {
        self.features.date_only
    }

    pub fn year(&self) -> i32 {
        self.features.year
    }

    pub fn month_number(&self) -> u32 {
        self.features.month_number
    }

    pub fn month_name(&self) -> &'static str {
        self.features.month_name
    }

    pub fn day_of_month(&self) -> u32 {
        self.features.day_of_month
    }

    pub fn day_name(&self) -> &'static str {
        self.features.day_name
    }

    pub fn hour(&self) -> u32 {
        self.features.hour
    }

    pub fn minute(&self) -> u32 {
        self.features.minute
    }

    pub fn hour_range(&self) -> &str {
        &self.features.hour_range
    }
}

impl Serialize for MessageRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let f = &self.features;
        let mut state = serializer.serialize_struct("MessageRecord", COLUMNS.len())?;
        state.serialize_field("user", &self.sender)?;
        state.serialize_field("message", &self.body)?;
        state.serialize_field("date", &self.timestamp.format(DATE_FORMAT).to_string())?;
        state.serialize_field(
            "only_date",
            &f.date_only.format(ONLY_DATE_FORMAT).to_string(),
        )?;
        state.serialize_field("year", &f.year)?;
        state.serialize_field("month", f.month_name)?;
        state.serialize_field("month_num", &f.month_number)?;
        state.serialize_field("day", &f.day_of_month)?;
        state.serialize_field("day_name", f.day_name)?;
        state.serialize_field("hour", &f.hour)?;
        state.serialize_field("minute", &f.minute)?;
        state.serialize_field("period", &f.hour_range)?;
        state.end()
    }
}

/// The ordered record table for one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTranscript {
    format: FormatTag,
    records: Vec<MessageRecord>,
    stats: ParseStats,
}

impl ParsedTranscript {
    pub(crate) fn new(format: FormatTag, records: Vec<MessageRecord>, stats: ParseStats) -> Self {
        Self {
            format,
            records,
            stats,
        }
    }

    /// Format the transcript was parsed under.
    pub fn format(&self) -> FormatTag {
        self.format
    }

    /// Records in export order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Counters describing what was kept and dropped.
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    /// Distinct real sender names, sorted. Sentinels are skipped.
    ///
    /// ```
    /// use chatstat::{FormatTag, parse};
    ///
    /// let raw = "01/01/24, 9:00 am - Bob: hi\n\
    ///            01/01/24, 9:01 am - Alice created group \"X\"\n\
    ///            01/01/24, 9:02 am - Alice: hello\n\
    ///            01/01/24, 9:03 am - Bob: bye";
    /// let transcript = parse(raw, FormatTag::Dashed)?;
    /// assert_eq!(transcript.senders(), vec!["Alice", "Bob"]);
    /// # Ok::<(), chatstat::ChatstatError>(())
    /// ```
    pub fn senders(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|r| r.sender.name())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Consumes the transcript, returning its records.
    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a ParsedTranscript {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for ParsedTranscript {
    type Item = MessageRecord;
    type IntoIter = std::vec::IntoIter<MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl Serialize for ParsedTranscript {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}
