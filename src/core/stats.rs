use serde::Serialize;

use crate::error::DropReason;

/// Counters collected during one parse call.
///
/// `candidates` is the number of timestamp anchors (bracketed) or physical
/// lines (dashed) the segmenter looked at. Every candidate ends up either as
/// a record, as a joined continuation line, or under exactly one drop reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub candidates: usize,
    pub records: usize,
    pub omitted_spans: usize,
    pub malformed_lines: usize,
    pub bad_timestamps: usize,
    pub media_placeholders: usize,
    pub continuation_lines: usize,
}

impl ParseStats {
    /// Counts one dropped candidate.
    pub fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::MalformedLine => self.malformed_lines += 1,
            DropReason::TimestampParseFailure => self.bad_timestamps += 1,
            DropReason::MediaPlaceholder => self.media_placeholders += 1,
            DropReason::OmissionSpan => self.omitted_spans += 1,
        }
    }

    /// Total candidates that produced no record.
    pub fn dropped(&self) -> usize {
        self.omitted_spans + self.malformed_lines + self.bad_timestamps + self.media_placeholders
    }

    /// Share of candidates that became records, in percent.
    pub fn retention_ratio(&self) -> f64 {
        if self.candidates == 0 {
            return 0.0;
        }
        self.records as f64 / self.candidates as f64 * 100.0
    }
}
