//! Shared lexical utilities for both export formats.
//!
//! These are the pure building blocks the parsers in [`crate::parsers`]
//! chain together: normalization, anchor/line matching, sender splitting and
//! strict timestamp parsing. Nothing here allocates records or logs.

pub mod bracketed;
pub mod dashed;
pub mod normalize;
pub mod timestamp;

pub use bracketed::{Anchor, Span, split_bracketed_sender, split_spans};
pub use dashed::{DashedLine, match_dashed_line, split_dashed_sender};
pub use normalize::{normalize, normalize_bracketed, normalize_dashed};
pub use timestamp::{ClockPrecision, expand_two_digit_year, parse_timestamp};
